//! Conditional CSS class composition.

/// Joins the tokens whose flag is `true`, separated by single spaces.
///
/// Empty tokens are skipped so callers can pass optional classes directly.
/// ```ignore
/// let class = class_names(&[("app-sidebar__item", true), ("app-sidebar__item--active", active)]);
/// ```
pub fn class_names(tokens: &[(&str, bool)]) -> String {
    tokens
        .iter()
        .filter(|(token, enabled)| *enabled && !token.trim().is_empty())
        .map(|(token, _)| token.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_keeps_enabled_tokens_in_order() {
        assert_eq!(
            class_names(&[("a", true), ("b", false), ("c", true)]),
            "a c"
        );
    }

    #[test]
    fn test_class_names_skips_blank_tokens() {
        assert_eq!(class_names(&[("", true), ("  ", true), ("x", true)]), "x");
        assert_eq!(class_names(&[]), "");
    }
}
