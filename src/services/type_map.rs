use regex::Regex;

use crate::model::WordType;

/// Ordered label rules; the first matching pattern wins.
const RULES: &[(&str, WordType)] = &[
    (r"ru-verb", WordType::VerbRu),
    (r"u-verb", WordType::VerbU),
    (r"irregular", WordType::VerbIrregular),
    (r"i-adj", WordType::AdjectiveI),
    (r"na-adj", WordType::AdjectiveNa),
    (r"adverb", WordType::Adverb),
    (r"particle", WordType::Particle),
    (r"expression", WordType::Expression),
    (r"noun", WordType::Noun),
];

pub struct TypeMapper {
    rules: Vec<(Regex, WordType)>,
}

impl TypeMapper {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(pattern, tag)| {
                // Patterns are literals above; a failure here is a programming error.
                let re = Regex::new(&format!("(?i){pattern}")).expect("valid type pattern");
                (re, tag.clone())
            })
            .collect();
        TypeMapper { rules }
    }

    /// Maps a free-text label to a tag. Labels that already are a canonical
    /// tag map to themselves; unmatched labels come back as `Other`.
    pub fn map(&self, raw: &str) -> WordType {
        if let Some(tag) = WordType::canonical(raw) {
            return tag;
        }

        self.rules
            .iter()
            .find(|(re, _)| re.is_match(raw))
            .map(|(_, tag)| tag.clone())
            .unwrap_or_else(|| WordType::Other(raw.to_string()))
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new()
    }
}
