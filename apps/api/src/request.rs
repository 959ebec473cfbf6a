//! Field helpers shared by the JSON request handlers.

/// `None` for an absent or empty field. Whitespace counts as content.
pub fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

/// `None` for an absent, empty or whitespace-only field.
/// For optional names, where blank input should fall back to a default.
pub fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_keeps_whitespace() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), Some("   ".to_string()));
        assert_eq!(non_empty(Some("hi".to_string())), Some("hi".to_string()));
    }

    #[test]
    fn test_non_blank_drops_whitespace() {
        assert_eq!(non_blank(Some(" \t\n".to_string())), None);
        assert_eq!(non_blank(Some(" Alex ".to_string())), Some(" Alex ".to_string()));
    }
}
