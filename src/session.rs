//! Session Token
//!
//! CSRF protection: every state-changing request carries the value of
//! the _session_id cookie.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Name of both the session cookie and the injected form field
pub const SESSION_COOKIE: &str = "_session_id";

/// Read the session token from document.cookie
pub fn csrf_token() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let doc = doc.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let raw = doc.cookie().ok()?;
    cookie_value(&raw, SESSION_COOKIE)
}

/// Extract one cookie value from a raw Cookie string
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    for pair in raw.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return percent_decode_str(value)
                    .decode_utf8()
                    .ok()
                    .map(|v| v.into_owned());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_single() {
        assert_eq!(
            cookie_value("_session_id=abc123", "_session_id"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_cookie_value_among_others() {
        let raw = "theme=dark; _session_id=abc123; lang=en";
        assert_eq!(cookie_value(raw, "_session_id"), Some("abc123".to_string()));
    }

    #[test]
    fn test_cookie_value_percent_decoded() {
        assert_eq!(
            cookie_value("_session_id=a%2Fb%3Dc", "_session_id"),
            Some("a/b=c".to_string())
        );
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("theme=dark", "_session_id"), None);
        assert_eq!(cookie_value("", "_session_id"), None);
    }

    #[test]
    fn test_cookie_value_does_not_match_prefix() {
        assert_eq!(cookie_value("__session_id=nope", "_session_id"), None);
    }
}
