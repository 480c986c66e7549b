//! Session cookie access. `user_id` is only ever read; `chat_id` is also
//! rewritten when an existing chat is loaded.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const CHAT_ID_MAX_AGE_SECS: u32 = 60 * 60 * 24; // 1 day

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Value of the named cookie, or `None` if it is not set.
pub fn get(name: &str) -> Option<String> {
    let doc = html_document()?;
    let cookies = doc.cookie().ok()?;
    parse_cookie_value(&cookies, name)
}

/// Rewrites the `chat_id` cookie for the freshly loaded chat.
pub fn set_chat_id(chat_id: &str) {
    if let Some(doc) = html_document() {
        if doc.set_cookie(&chat_id_cookie(chat_id)).is_err() {
            log::error!("failed to set chat_id cookie");
        }
    }
}

fn chat_id_cookie(chat_id: &str) -> String {
    format!("chat_id={chat_id}; path=/; max-age={CHAT_ID_MAX_AGE_SECS}")
}

fn parse_cookie_value(cookies: &str, name: &str) -> Option<String> {
    for pair in cookies.split(';') {
        let pair = pair.trim();
        if let Some(rest) = pair.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_anywhere_in_the_string() {
        let cookies = "user_id=u-42; chat_id=c-7; theme=dark";
        assert_eq!(parse_cookie_value(cookies, "user_id").as_deref(), Some("u-42"));
        assert_eq!(parse_cookie_value(cookies, "chat_id").as_deref(), Some("c-7"));
        assert_eq!(parse_cookie_value(cookies, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(parse_cookie_value("user_id=u-42", "chat_id"), None);
        assert_eq!(parse_cookie_value("", "chat_id"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        // "chat_idx" must not satisfy a lookup for "chat_id"
        assert_eq!(parse_cookie_value("chat_idx=9", "chat_id"), None);
        assert_eq!(
            parse_cookie_value("chat_idx=9; chat_id=real", "chat_id").as_deref(),
            Some("real")
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            parse_cookie_value("chat_id=a; chat_id=b", "chat_id").as_deref(),
            Some("a")
        );
    }

    #[test]
    fn chat_id_cookie_has_path_and_one_day_expiry() {
        assert_eq!(chat_id_cookie("abc"), "chat_id=abc; path=/; max-age=86400");
    }
}
