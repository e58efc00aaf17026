use crate::keywords::matching_keywords;
use crate::model::reasons::Reason;
use crate::model::scores::PartialScore;

/// Keyword points that saturate the note score.
pub const NOTE_POINTS_SCALE: f64 = 10.0;

pub fn score_note(note: &str) -> PartialScore {
    let note_lc = note.to_lowercase();
    let mut points: f64 = 0.0;
    let mut reasons = Vec::new();

    for def in matching_keywords(&note_lc) {
        tracing::trace!(term = def.term, language = ?def.language, "note keyword matched");
        points += def.weight;
        reasons.push(Reason::NoteSignal(def.term));
    }

    PartialScore {
        score: (points / NOTE_POINTS_SCALE).min(1.0),
        reasons,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_note.rs"]
mod tests;
