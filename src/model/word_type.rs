use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech / conjugation class of a word.
///
/// The consumer declares a closed `WordType` union; labels the mapper cannot
/// place are carried verbatim in `Other` so callers can decide whether to
/// accept or reject them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WordType {
    VerbRu,
    VerbU,
    VerbIrregular,
    Noun,
    AdjectiveI,
    AdjectiveNa,
    Adverb,
    Particle,
    Expression,
    Other(String),
}

impl WordType {
    pub const CANONICAL: [WordType; 9] = [
        WordType::VerbRu,
        WordType::VerbU,
        WordType::VerbIrregular,
        WordType::Noun,
        WordType::AdjectiveI,
        WordType::AdjectiveNa,
        WordType::Adverb,
        WordType::Particle,
        WordType::Expression,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            WordType::VerbRu => "verb-ru",
            WordType::VerbU => "verb-u",
            WordType::VerbIrregular => "verb-irregular",
            WordType::Noun => "noun",
            WordType::AdjectiveI => "adjective-i",
            WordType::AdjectiveNa => "adjective-na",
            WordType::Adverb => "adverb",
            WordType::Particle => "particle",
            WordType::Expression => "expression",
            WordType::Other(label) => label,
        }
    }

    /// Exact (case-insensitive) lookup of a canonical tag.
    pub fn canonical(label: &str) -> Option<WordType> {
        Self::CANONICAL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, WordType::Other(_))
    }
}

impl From<String> for WordType {
    fn from(label: String) -> Self {
        WordType::canonical(&label).unwrap_or(WordType::Other(label))
    }
}

impl From<WordType> for String {
    fn from(t: WordType) -> Self {
        match t {
            WordType::Other(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_its_label() {
        for t in WordType::CANONICAL {
            let label = String::from(t.clone());
            assert_eq!(WordType::from(label), t);
        }
    }

    #[test]
    fn unknown_labels_stay_verbatim() {
        let t = WordType::from("Counter".to_string());
        assert_eq!(t, WordType::Other("Counter".into()));
        assert!(!t.is_canonical());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"Counter\"");
    }
}
