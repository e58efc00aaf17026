pub mod defs;

pub use defs::{KeywordDef, Language, builtin_keywords};

/// Table entries whose term occurs anywhere in `note_lc`, in table order.
///
/// Matching is plain substring search: no tokenization, no word boundaries.
/// The caller is expected to have lower-cased the note.
pub fn matching_keywords(note_lc: &str) -> impl Iterator<Item = &'static KeywordDef> + '_ {
    builtin_keywords()
        .iter()
        .filter(move |def| note_lc.contains(def.term))
}

pub fn find_keyword(term: &str) -> Option<&'static KeywordDef> {
    builtin_keywords().iter().find(|def| def.term == term)
}

#[cfg(test)]
#[path = "../../tests/src_inline/keywords/tests.rs"]
mod tests;
