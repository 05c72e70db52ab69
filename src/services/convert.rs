use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::{ConjugationItem, RawRow};
use crate::parsers::sheet;
use crate::services::builder::{BuildOutcome, RecordBuilder};
use crate::services::{encoding, store};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: Option<usize>,
    pub reason: String,
}

#[derive(Debug)]
pub struct ConvertReport {
    pub encoding: &'static str,
    pub written: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Builds every row in order, collecting skips instead of stopping.
pub fn build_all(rows: &[RawRow], builder: &RecordBuilder) -> (Vec<ConjugationItem>, Vec<SkippedRow>) {
    let mut items = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for row in rows {
        match builder.build(row) {
            BuildOutcome::Built(item) => items.push(item),
            BuildOutcome::Skipped(reason) => skipped.push(SkippedRow {
                line: row.line,
                reason: reason.to_string(),
            }),
        }
    }

    (items, skipped)
}

/// Spreadsheet export at `input` to a complete module at `output`.
/// Nothing is written if reading or parsing the input fails.
pub fn run(input: &Path, output: &Path, builder: &RecordBuilder) -> Result<ConvertReport> {
    let decoded = encoding::read_text(input)?;
    let rows = sheet::parse(&decoded.text)?;
    info!("{} rows read from {}", rows.len(), input.display());

    let (items, skipped) = build_all(&rows, builder);
    store::save(output, &items)?;

    Ok(ConvertReport {
        encoding: decoded.encoding,
        written: items.len(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_input_order_and_reports_skips() {
        let text = "Definition,Type,Vocab dictionary Kanji,Vocab Dictionary Hiragana\n\
                    to eat,ru-verb,食べる,たべる\n\
                    ,u-verb,飲む,のむ\n\
                    to go,irregular,行く,いく\n";
        let rows = sheet::parse(text).unwrap();
        let (items, skipped) = build_all(&rows, &RecordBuilder::new());

        let kanji: Vec<_> = items
            .iter()
            .map(|i| i.word.dictionary_form.kanji.as_str())
            .collect();
        assert_eq!(kanji, ["食べる", "行く"]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].line, Some(3));
        assert!(skipped[0].reason.contains("definition"));
    }
}
