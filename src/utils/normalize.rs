//! Input normalization for user-supplied identifier lists.

/// Split a comma-separated free-text field into an identifier list.
///
/// Splits on comma, trims whitespace per element, and discards empty
/// elements. Does not deduplicate or validate the surviving tokens.
pub fn parse_id_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list_trims_and_drops_empty() {
        assert_eq!(parse_id_list("123, 456 ,, 789"), vec!["123", "456", "789"]);
    }

    #[test]
    fn test_parse_id_list_empty_input() {
        assert!(parse_id_list("").is_empty());
        assert!(parse_id_list("   ").is_empty());
        assert!(parse_id_list(",,,").is_empty());
    }

    #[test]
    fn test_parse_id_list_single_token() {
        assert_eq!(parse_id_list("31345678"), vec!["31345678"]);
        assert_eq!(parse_id_list("  31345678  "), vec!["31345678"]);
    }

    #[test]
    fn test_parse_id_list_preserves_order_and_duplicates() {
        assert_eq!(parse_id_list("2,1,2"), vec!["2", "1", "2"]);
    }

    #[test]
    fn test_parse_id_list_newlines_inside_tokens() {
        // Whole-token whitespace is trimmed even when it spans lines
        assert_eq!(parse_id_list("123,\n456"), vec!["123", "456"]);
    }
}
