use std::io::{BufRead, Write};

use crate::error::{ConjugationError, Result};
use crate::model::RawRow;
use crate::services::builder::columns;

/// Operator prompts in asking order, each filling the primary source column
/// so the answers go through the same builder as spreadsheet rows.
pub const PROMPTS: &[(&str, &str)] = &[
    (columns::DEFINITION[0], "Enter English meaning: "),
    (columns::TYPE[0], "Enter word type: "),
    (columns::DICT_HIRAGANA[0], "Enter dictionary hiragana: "),
    (columns::DICT_KANJI[0], "Enter dictionary kanji: "),
    (columns::PRESENT_AFF_HIRAGANA[0], "Enter present affirmative hiragana: "),
    (columns::PRESENT_AFF_KANJI[0], "Enter present affirmative kanji: "),
    (columns::PRESENT_NEG_HIRAGANA[0], "Enter present negative hiragana: "),
    (columns::PRESENT_NEG_KANJI[0], "Enter present negative kanji: "),
    (columns::PAST_AFF_HIRAGANA[0], "Enter past affirmative hiragana: "),
    (columns::PAST_AFF_KANJI[0], "Enter past affirmative kanji: "),
    (columns::PAST_NEG_HIRAGANA[0], "Enter past negative hiragana: "),
    (columns::PAST_NEG_KANJI[0], "Enter past negative kanji: "),
    (columns::TE_HIRAGANA[0], "Enter te form hiragana (optional): "),
    (columns::TE_KANJI[0], "Enter te form kanji (optional): "),
];

/// Asks every prompt in order. End of input before the last answer aborts.
pub fn collect<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RawRow> {
    let mut row = RawRow::new();

    for (column, prompt) in PROMPTS {
        output
            .write_all(prompt.as_bytes())
            .and_then(|_| output.flush())
            .map_err(|e| ConjugationError::io("<stdout>", e))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| ConjugationError::io("<stdin>", e))?;
        if read == 0 {
            return Err(ConjugationError::Aborted);
        }

        let answer = line.trim();
        if !answer.is_empty() {
            row.insert(*column, answer);
        }
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn answers_land_in_primary_columns() {
        let answers = "to eat\nru-verb\nたべる\n食べる\nたべます\n食べます\n\n\n\n\n\n\nたべて\n\n";
        let mut input = Cursor::new(answers.as_bytes());
        let mut output = Vec::new();

        let row = collect(&mut input, &mut output).unwrap();
        assert_eq!(row.get("Definition"), Some("to eat"));
        assert_eq!(row.get("Vocab dictionary Kanji"), Some("食べる"));
        assert_eq!(row.get("Present Postive Kanji"), Some("食べます"));
        assert_eq!(row.get("Present Negative Kanji"), None);
        assert_eq!(row.get("Te form Hiragana"), Some("たべて"));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Enter English meaning: Enter word type: "));
    }

    #[test]
    fn end_of_input_aborts() {
        let mut input = Cursor::new("to eat\nru-verb\n".as_bytes());
        let err = collect(&mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ConjugationError::Aborted));
    }
}
