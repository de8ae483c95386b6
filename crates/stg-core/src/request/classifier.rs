//! Token classification.
//!
//! Decides whether user input names a request number or something else
//! (a package or a project). Classification only gates which lookups are
//! attempted; it resolves nothing by itself.

use crate::ids::RequestId;

/// True when the token is made of ASCII decimal digits only.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Classify `token` and parse it as a request number.
///
/// Numeric tokens too large for a request number classify as names.
pub fn parse_request_id(token: &str) -> Option<RequestId> {
    if !is_numeric_token(token) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_numeric() {
        assert!(is_numeric_token("212454"));
        assert!(is_numeric_token("0"));
        assert!(is_numeric_token("007"));
    }

    #[test]
    fn test_names_are_not_numeric() {
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("vim"));
        assert!(!is_numeric_token("devel:foo"));
        assert!(!is_numeric_token("python3"));
    }

    #[test]
    fn test_sign_and_whitespace_are_not_numeric() {
        assert!(!is_numeric_token("-12"));
        assert!(!is_numeric_token("+12"));
        assert!(!is_numeric_token(" 12"));
        assert!(!is_numeric_token("12 "));
    }

    #[test]
    fn test_non_ascii_digits_are_not_numeric() {
        assert!(!is_numeric_token("١٢٣"));
    }

    #[test]
    fn test_parse_request_id() {
        assert_eq!(parse_request_id("223870"), Some(RequestId::new(223870)));
        assert_eq!(parse_request_id("007"), Some(RequestId::new(7)));
        assert_eq!(parse_request_id("glibc"), None);
    }

    #[test]
    fn test_overflowing_number_is_not_a_request_id() {
        assert_eq!(parse_request_id("99999999999999999999999"), None);
    }
}
