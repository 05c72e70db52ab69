use serde::{Deserialize, Serialize};

use super::word_type::WordType;

/// One written form of a word, in both scripts.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FormPair {
    #[serde(default)]
    pub kanji: String,

    #[serde(default)]
    pub hiragana: String,
}

impl FormPair {
    pub fn new(kanji: impl Into<String>, hiragana: impl Into<String>) -> Self {
        FormPair {
            kanji: kanji.into(),
            hiragana: hiragana.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WordInfo {
    #[serde(rename = "dictionary", alias = "dictionaryForm")]
    pub dictionary_form: FormPair,

    pub definition: String,

    #[serde(rename = "type")]
    pub word_type: WordType,
}

/// A single entry of the generated `conjugationData` array.
///
/// Keys follow the `ConjugationItem` interface emitted in the module header.
/// The camelCase layout written by older append runs is accepted on read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConjugationItem {
    #[serde(rename = "Word", alias = "word")]
    pub word: WordInfo,

    #[serde(rename = "Present Affirmative", alias = "presentAffirmative", default)]
    pub present_affirmative: FormPair,

    #[serde(rename = "Present Negative", alias = "presentNegative", default)]
    pub present_negative: FormPair,

    #[serde(rename = "Past Affirmative", alias = "pastAffirmative", default)]
    pub past_affirmative: FormPair,

    #[serde(rename = "Past Negative", alias = "pastNegative", default)]
    pub past_negative: FormPair,

    // Always serialized, as null when there is no te form data.
    #[serde(rename = "Te Form", alias = "teForm", default)]
    pub te_form: Option<FormPair>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConjugationItem {
        ConjugationItem {
            word: WordInfo {
                dictionary_form: FormPair::new("食べる", "たべる"),
                definition: "to eat".into(),
                word_type: WordType::VerbRu,
            },
            present_affirmative: FormPair::new("食べます", "たべます"),
            present_negative: FormPair::new("食べません", "たべません"),
            past_affirmative: FormPair::new("食べました", "たべました"),
            past_negative: FormPair::new("食べませんでした", "たべませんでした"),
            te_form: None,
        }
    }

    #[test]
    fn serializes_with_interface_keys_and_null_te_form() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["Word"]["dictionary"]["kanji"], "食べる");
        assert_eq!(value["Word"]["type"], "verb-ru");
        assert_eq!(value["Present Affirmative"]["hiragana"], "たべます");
        assert!(value.get("Te Form").unwrap().is_null());
    }

    #[test]
    fn reads_camel_case_layout_from_older_append_runs() {
        let legacy = json!({
            "word": {
                "definition": "to drink",
                "type": "verb-u",
                "dictionary": { "hiragana": "のむ", "kanji": "飲む" }
            },
            "presentAffirmative": { "hiragana": "のみます", "kanji": "飲みます" },
            "presentNegative": { "hiragana": "のみません", "kanji": "飲みません" },
            "pastAffirmative": { "hiragana": "のみました", "kanji": "飲みました" },
            "pastNegative": { "hiragana": "のみませんでした", "kanji": "飲みませんでした" }
        });

        let item: ConjugationItem = serde_json::from_value(legacy).unwrap();
        assert_eq!(item.word.dictionary_form.kanji, "飲む");
        assert_eq!(item.word.word_type, WordType::VerbU);
        assert_eq!(item.past_negative.hiragana, "のみませんでした");
        assert_eq!(item.te_form, None);
    }
}
