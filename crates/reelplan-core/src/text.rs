//! Small string helpers shared by the models and the generator.

/// Split free text on newlines and commas, trimming each entry and dropping
/// empty ones.
///
/// ```rust
/// use reelplan_core::text::parse_list;
///
/// assert_eq!(
///     parse_list("Daily scripts,\n  Proof-based CTA ,,\n"),
///     vec!["Daily scripts", "Proof-based CTA"]
/// );
/// assert!(parse_list("").is_empty());
/// ```
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a number of seconds as `"{n}s"`. Whole values print without a
/// fractional part.
pub fn humanize_seconds(seconds: f64) -> String {
    format!("{seconds}s")
}

/// Remove every whitespace character and lowercase the rest.
pub fn compact_lowercase(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_preserves_order() {
        assert_eq!(parse_list("b\na, c"), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_list_only_separators() {
        assert!(parse_list(" ,\n , ").is_empty());
    }

    #[test]
    fn test_parse_list_handles_crlf() {
        assert_eq!(parse_list("one\r\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("no time to film"), "No time to film");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize("écran"), "Écran");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_humanize_seconds() {
        assert_eq!(humanize_seconds(7.5), "7.5s");
        assert_eq!(humanize_seconds(8.0), "8s");
        assert_eq!(humanize_seconds(30.0), "30s");
    }

    #[test]
    fn test_compact_lowercase() {
        assert_eq!(compact_lowercase("Instagram Reels"), "instagramreels");
        assert_eq!(compact_lowercase(" Instant\tFunnel  OS "), "instantfunnelos");
    }
}
