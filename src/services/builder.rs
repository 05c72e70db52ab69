use tracing::{info, warn};

use crate::model::{ConjugationItem, FormPair, RawRow, WordInfo, WordType};
use crate::services::normalize::normalize;
use crate::services::type_map::TypeMapper;

/// Source columns per attribute, in lookup priority order. Spellings follow
/// the published spreadsheet, typos included.
pub mod columns {
    pub const DEFINITION: &[&str] = &["Definition"];
    pub const TYPE: &[&str] = &["Type"];
    pub const DICT_HIRAGANA: &[&str] = &["Vocab Dictionary Hiragana"];
    pub const DICT_KANJI: &[&str] = &["Vocab dictionary Kanji"];
    pub const PRESENT_AFF_HIRAGANA: &[&str] = &["Present Postive Hiragana", "Vocab Masu Hiragana"];
    pub const PRESENT_AFF_KANJI: &[&str] = &["Present Postive Kanji", "Vocab Masu Kanji"];
    pub const PRESENT_NEG_HIRAGANA: &[&str] = &["Present Negative Hiragana"];
    pub const PRESENT_NEG_KANJI: &[&str] = &["Present Negative Kanji"];
    pub const PAST_AFF_HIRAGANA: &[&str] = &["Past Postive Hiragana"];
    pub const PAST_AFF_KANJI: &[&str] = &["Past Postive Kanji"];
    pub const PAST_NEG_HIRAGANA: &[&str] = &["Past Negatie Hiragana"];
    pub const PAST_NEG_KANJI: &[&str] = &["Past Negative Kanji"];
    pub const TE_KANJI: &[&str] = &["Te form Kanji"];
    pub const TE_HIRAGANA: &[&str] = &["Te form Hiragana"];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingFields(Vec<&'static str>),
    UnknownType(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingFields(fields) => {
                write!(f, "missing essential data: {}", fields.join(", "))
            }
            SkipReason::UnknownType(label) => write!(f, "unrecognized word type {label:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Built(ConjugationItem),
    Skipped(SkipReason),
}

impl BuildOutcome {
    pub fn into_item(self) -> Option<ConjugationItem> {
        match self {
            BuildOutcome::Built(item) => Some(item),
            BuildOutcome::Skipped(_) => None,
        }
    }
}

/// Resolves an attribute from the first candidate column holding a value.
pub fn resolve(row: &RawRow, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|column| normalize(row.get(column)))
}

/// Like [`resolve`], but a value that trimmed down to nothing counts as absent.
fn resolve_non_empty(row: &RawRow, candidates: &[&str]) -> Option<String> {
    resolve(row, candidates).filter(|v| !v.is_empty())
}

pub struct RecordBuilder {
    mapper: TypeMapper,
    strict_types: bool,
    filler: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        RecordBuilder {
            mapper: TypeMapper::new(),
            strict_types: false,
            filler: String::new(),
        }
    }

    /// Reject rows whose type label maps to no known tag.
    pub fn strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    /// Text written for conjugation slots that have no value.
    pub fn filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = filler.into();
        self
    }

    pub fn build(&self, row: &RawRow) -> BuildOutcome {
        let definition = resolve_non_empty(row, columns::DEFINITION);
        let raw_type = resolve_non_empty(row, columns::TYPE);
        let dict_hiragana = resolve_non_empty(row, columns::DICT_HIRAGANA);
        let dict_kanji = resolve_non_empty(row, columns::DICT_KANJI);

        if let Some(kanji) = &dict_kanji {
            info!(
                line = ?row.line,
                "processing: {} ({})",
                kanji,
                dict_hiragana.as_deref().unwrap_or("")
            );
        }

        let (definition, raw_type, dict_hiragana, dict_kanji) =
            match (definition, raw_type, dict_hiragana, dict_kanji) {
                (Some(d), Some(t), Some(h), Some(k)) => (d, t, h, k),
                (d, t, h, k) => {
                    let mut missing = Vec::new();
                    if d.is_none() {
                        missing.push("definition");
                    }
                    if t.is_none() {
                        missing.push("type");
                    }
                    if k.is_none() {
                        missing.push("dictionary kanji");
                    }
                    if h.is_none() {
                        missing.push("dictionary hiragana");
                    }
                    let reason = SkipReason::MissingFields(missing);
                    warn!(
                        line = ?row.line,
                        "skipping row {}: {}",
                        k.as_deref().unwrap_or("Unknown"),
                        reason
                    );
                    return BuildOutcome::Skipped(reason);
                }
            };

        let word_type = self.mapper.map(&raw_type);
        if let WordType::Other(label) = &word_type {
            if self.strict_types {
                let reason = SkipReason::UnknownType(label.clone());
                warn!(line = ?row.line, "skipping row {}: {}", dict_kanji, reason);
                return BuildOutcome::Skipped(reason);
            }
            warn!(line = ?row.line, "word type {:?} kept as-is", label);
        }

        let te_kanji = resolve_non_empty(row, columns::TE_KANJI);
        let te_hiragana = resolve_non_empty(row, columns::TE_HIRAGANA);
        let te_form = if te_kanji.is_some() || te_hiragana.is_some() {
            Some(FormPair {
                kanji: te_kanji.unwrap_or_default(),
                hiragana: te_hiragana.unwrap_or_default(),
            })
        } else {
            None
        };

        BuildOutcome::Built(ConjugationItem {
            word: WordInfo {
                dictionary_form: FormPair::new(dict_kanji, dict_hiragana),
                definition,
                word_type,
            },
            present_affirmative: self.pair(
                row,
                columns::PRESENT_AFF_KANJI,
                columns::PRESENT_AFF_HIRAGANA,
            ),
            present_negative: self.pair(
                row,
                columns::PRESENT_NEG_KANJI,
                columns::PRESENT_NEG_HIRAGANA,
            ),
            past_affirmative: self.pair(row, columns::PAST_AFF_KANJI, columns::PAST_AFF_HIRAGANA),
            past_negative: self.pair(row, columns::PAST_NEG_KANJI, columns::PAST_NEG_HIRAGANA),
            te_form,
        })
    }

    fn pair(&self, row: &RawRow, kanji: &[&str], hiragana: &[&str]) -> FormPair {
        FormPair {
            kanji: resolve(row, kanji).unwrap_or_else(|| self.filler.clone()),
            hiragana: resolve(row, hiragana).unwrap_or_else(|| self.filler.clone()),
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
