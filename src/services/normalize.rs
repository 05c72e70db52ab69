/// Cleans one raw cell: absent, empty and `nan` (any case) become `None`,
/// anything else is trimmed.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let s = raw?;
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return None;
    }
    Some(s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn absence_markers() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("nan")), None);
        assert_eq!(normalize(Some("NaN")), None);
        assert_eq!(normalize(Some("NAN")), None);
    }

    #[test]
    fn trims_everything_else() {
        assert_eq!(normalize(Some("  食べる ")).as_deref(), Some("食べる"));
        assert_eq!(normalize(Some("to eat")).as_deref(), Some("to eat"));
        assert_eq!(normalize(Some("\tnani\n")).as_deref(), Some("nani"));
    }

    #[test]
    fn only_the_exact_token_is_nan() {
        // Padding means the cell is not the bare token.
        assert_eq!(normalize(Some(" nan ")).as_deref(), Some("nan"));
        assert_eq!(normalize(Some("banana")).as_deref(), Some("banana"));
        assert_eq!(normalize(Some("   ")).as_deref(), Some(""));
    }
}
