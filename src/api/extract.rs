//! Parameter lookup shared by the handlers.
//!
//! Parameters may arrive through several channels (query string, JSON body,
//! `x-*` headers). Handlers list the candidates in precedence order and take
//! the first non-empty one.

use axum::http::HeaderMap;

/// Header carrying the slug.
pub const X_SLUG: &str = "x-slug";
/// Header carrying the destination URL.
pub const X_URL: &str = "x-url";
/// Header carrying the request id, set by the request-id middleware.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Returns the first candidate that is present and non-empty.
pub fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// Returns the first occurrence of `key` in a decoded query string.
///
/// Repeated keys (`?slug=a&slug=b`) are not an error; later occurrences are ignored.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Returns a header as a string, if present and valid UTF-8/ASCII.
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Interprets a query flag such as `?no_redir`.
///
/// Present with any value other than `0` or `false` (case-insensitive) means set,
/// including a bare `?no_redir`.
pub fn is_flag_set(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !(v == "0" || v.eq_ignore_ascii_case("false")),
    }
}

/// Identifier used to correlate a server error with the logs.
///
/// The request-id middleware stamps every incoming request, so `unknown` only
/// shows up when a handler is mounted without it.
pub fn trace_id(headers: &HeaderMap) -> String {
    header_str(headers, X_REQUEST_ID)
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_first_present_precedence() {
        assert_eq!(first_present([Some("a"), Some("b")]), Some("a"));
        assert_eq!(first_present([None, Some("b")]), Some("b"));
        assert_eq!(first_present([Some(""), Some("b")]), Some("b"));
        assert_eq!(first_present([None, Some("")]), None);
    }

    #[test]
    fn test_first_param_takes_first_occurrence() {
        let pairs = vec![
            ("slug".to_string(), "a".to_string()),
            ("no_redir".to_string(), String::new()),
            ("slug".to_string(), "b".to_string()),
        ];

        assert_eq!(first_param(&pairs, "slug"), Some("a"));
        assert_eq!(first_param(&pairs, "no_redir"), Some(""));
        assert_eq!(first_param(&pairs, "url"), None);
    }

    #[test]
    fn test_flag_values() {
        assert!(!is_flag_set(None));
        assert!(is_flag_set(Some("")));
        assert!(is_flag_set(Some("true")));
        assert!(is_flag_set(Some("1")));
        assert!(is_flag_set(Some("yes")));
        assert!(!is_flag_set(Some("0")));
        assert!(!is_flag_set(Some("FALSE")));
    }

    #[test]
    fn test_trace_id() {
        let mut headers = HeaderMap::new();
        headers.insert(X_REQUEST_ID, HeaderValue::from_static("0b6e1f"));

        assert_eq!(trace_id(&headers), "0b6e1f");
        assert_eq!(trace_id(&HeaderMap::new()), "unknown");
    }
}
