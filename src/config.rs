use std::env;
use std::path::PathBuf;

/// Published CSV export of the conjugation spreadsheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQ2JYD9F35V9EfYtV7sqPx8DpCx-kDEQgSTbnKoQRCljpszh6cUNO3lGrx6tl52SwGrJLwlzBPtNt1M/pub?output=csv";
pub const DEFAULT_OUTPUT: &str = "conjugation_data.ts";
pub const DEFAULT_APPEND_OUTPUT: &str = "data.ts";
pub const DEFAULT_DOWNLOAD: &str = "conjugation_sheet.csv";

/// Defaults for paths and URLs not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sheet_url: String,
    pub output: PathBuf,
    pub append_output: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Settings {
            sheet_url: non_empty("CONJUGATION_SHEET_URL")
                .unwrap_or_else(|| DEFAULT_SHEET_URL.to_string()),
            output: non_empty("CONJUGATION_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            append_output: non_empty("CONJUGATION_APPEND_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_APPEND_OUTPUT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let s = Settings::from_lookup(|_| None);
        assert_eq!(s.sheet_url, DEFAULT_SHEET_URL);
        assert_eq!(s.output, PathBuf::from("conjugation_data.ts"));
        assert_eq!(s.append_output, PathBuf::from("data.ts"));
    }

    #[test]
    fn environment_overrides_and_blank_values_are_ignored() {
        let s = Settings::from_lookup(|key| match key {
            "CONJUGATION_OUTPUT" => Some("out/verbs.ts".into()),
            "CONJUGATION_SHEET_URL" => Some("  ".into()),
            _ => None,
        });
        assert_eq!(s.output, PathBuf::from("out/verbs.ts"));
        assert_eq!(s.sheet_url, DEFAULT_SHEET_URL);
    }
}
