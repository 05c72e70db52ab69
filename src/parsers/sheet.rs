use csv::ReaderBuilder;

use crate::error::Result;
use crate::model::RawRow;

/// Splits a spreadsheet CSV export into rows keyed by header name.
///
/// Short rows only carry the columns they have; extra cells beyond the header
/// are dropped. Cell values are kept untouched, normalization happens later.
pub fn parse(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let line = record.position().map(|p| p.line() as usize).unwrap_or(i + 2);

        let mut row = RawRow::at_line(line);
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header, value);
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_rows_by_header() {
        let text = "Definition,Type,Vocab dictionary Kanji\nto eat,ru-verb,食べる\nto go,irregular,行く\n";
        let rows = parse(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Definition"), Some("to eat"));
        assert_eq!(rows[0].get("Vocab dictionary Kanji"), Some("食べる"));
        assert_eq!(rows[1].get("Type"), Some("irregular"));
        assert_eq!(rows[0].line, Some(2));
        assert_eq!(rows[1].line, Some(3));
    }

    #[test]
    fn quoted_cells_and_short_rows() {
        let text = "Definition,Type,Te form Kanji\n\"to eat, to consume\",ru-verb\n";
        let rows = parse(text).unwrap();
        assert_eq!(rows[0].get("Definition"), Some("to eat, to consume"));
        assert_eq!(rows[0].get("Te form Kanji"), None);
    }

    #[test]
    fn header_only_input_has_no_rows() {
        assert!(parse("Definition,Type\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }
}
