use crate::model::ConjugationItem;

pub const DECLARATION: &str = "export const conjugationData: ConjugationItem[]";

pub const HEADER: &str = r#"export interface ConjugationItem {
  Word: {
    // Dictionary form information
    dictionary: {
      kanji: string
      hiragana: string
    }
    // Word metadata
    definition: string
    type: WordType
  }
  // Conjugation forms
  "Present Affirmative": {
    kanji: string
    hiragana: string
  }
  "Present Negative": {
    kanji: string
    hiragana: string
  }
  "Past Affirmative": {
    kanji: string
    hiragana: string
  }
  "Past Negative": {
    kanji: string
    hiragana: string
  }
  "Te Form": {
    kanji: string
    hiragana: string
  } | null
}

export type WritingSystem = "kanji" | "hiragana"
export type VerbForm = "dictionary" | "masu"
export type WordType =
  | "verb-ru"
  | "verb-u"
  | "verb-irregular"
  | "noun"
  | "adjective-i"
  | "adjective-na"
  | "adverb"
  | "particle"
  | "expression"

// Restructured conjugation data with improved organization
"#;

/// Renders the full TypeScript module for a record sequence.
pub fn render(items: &[ConjugationItem]) -> Result<String, serde_json::Error> {
    // serde_json's pretty printer indents by two spaces and leaves
    // non-ASCII characters unescaped.
    let body = serde_json::to_string_pretty(items)?;

    let mut out = String::with_capacity(HEADER.len() + body.len() + 64);
    out.push_str(HEADER);
    out.push_str(DECLARATION);
    out.push_str(" = ");
    out.push_str(&body);
    out.push_str(";\n");
    Ok(out)
}

/// Reads the record sequence back out of a rendered module.
///
/// Accepts any text before the declaration and an optional `;` after the
/// array; anything else after it is an error. An empty literal reads as an
/// empty sequence.
pub fn parse(content: &str) -> Result<Vec<ConjugationItem>, String> {
    let start = content
        .find(DECLARATION)
        .ok_or_else(|| "conjugationData declaration not found".to_string())?;
    let after_decl = &content[start + DECLARATION.len()..];

    let eq = after_decl
        .find('=')
        .ok_or_else(|| "missing '=' after conjugationData declaration".to_string())?;
    let literal = &after_decl[eq + 1..];

    let bare = literal.trim();
    if bare.strip_suffix(';').unwrap_or(bare).trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut stream = serde_json::Deserializer::from_str(literal).into_iter::<Vec<ConjugationItem>>();
    let items = stream
        .next()
        .ok_or_else(|| "no array after '='".to_string())?
        .map_err(|e| e.to_string())?;

    let rest = literal[stream.byte_offset()..].trim();
    let rest = rest.strip_prefix(';').unwrap_or(rest).trim();
    if !rest.is_empty() {
        return Err(format!("unexpected text after array: {:.32}", rest));
    }

    Ok(items)
}
