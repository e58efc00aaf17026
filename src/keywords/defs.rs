#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Indonesian,
    English,
    Shared,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordDef {
    pub term: &'static str,
    pub weight: f64,
    pub language: Language,
}

const BUILTIN_KEYWORDS: &[KeywordDef] = &[
    KeywordDef {
        term: "sepsis",
        weight: 3.0,
        language: Language::Shared,
    },
    KeywordDef {
        term: "infeksi",
        weight: 1.8,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "infection",
        weight: 1.8,
        language: Language::English,
    },
    KeywordDef {
        term: "demam",
        weight: 1.0,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "fever",
        weight: 1.0,
        language: Language::English,
    },
    KeywordDef {
        term: "menggigil",
        weight: 1.0,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "chills",
        weight: 1.0,
        language: Language::English,
    },
    KeywordDef {
        term: "hipotensi",
        weight: 2.0,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "hypotension",
        weight: 2.0,
        language: Language::English,
    },
    KeywordDef {
        term: "takikardia",
        weight: 1.2,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "tachycardia",
        weight: 1.2,
        language: Language::English,
    },
    KeywordDef {
        term: "takipnea",
        weight: 1.2,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "tachypnea",
        weight: 1.2,
        language: Language::English,
    },
    KeywordDef {
        term: "laktat",
        weight: 1.5,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "lactate",
        weight: 1.5,
        language: Language::English,
    },
    KeywordDef {
        term: "penurunan kesadaran",
        weight: 1.5,
        language: Language::Indonesian,
    },
    KeywordDef {
        term: "oliguria",
        weight: 1.4,
        language: Language::Shared,
    },
    KeywordDef {
        term: "bundel sepsis",
        weight: 1.2,
        language: Language::Indonesian,
    },
];

pub fn builtin_keywords() -> &'static [KeywordDef] {
    BUILTIN_KEYWORDS
}
