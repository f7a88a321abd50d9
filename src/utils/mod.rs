//! Common utilities and helper functions

pub mod runtime;

use regex::Regex;
use std::sync::OnceLock;

/// Template for player headshots; `{player_id}` is substituted
pub const PHOTO_URL_TEMPLATE: &str = "https://static.cfl.ca/wp-content/uploads/{player_id}.png";

/// Derive a player's photo URL from their identifier
///
/// Pure string derivation, nothing is fetched.
pub fn player_photo_url(player_id: impl std::fmt::Display) -> String {
    PHOTO_URL_TEMPLATE.replace("{player_id}", &player_id.to_string())
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

    let re = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

    re.replace_all(text.trim(), " ").to_string()
}

/// Last all-digit path segment of a player link, e.g.
/// `/players/nathan-rourke/160923/` -> `160923`
pub fn player_id_from_href(href: &str) -> Option<String> {
    static PLAYER_ID_RE: OnceLock<Regex> = OnceLock::new();

    let re = PLAYER_ID_RE
        .get_or_init(|| Regex::new(r"/(\d+)/?(?:[?#].*)?$").expect("Invalid regex pattern"));

    re.captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_photo_url() {
        assert_eq!(
            player_photo_url(160923),
            "https://static.cfl.ca/wp-content/uploads/160923.png"
        );
        assert_eq!(
            player_photo_url("abc"),
            "https://static.cfl.ca/wp-content/uploads/abc.png"
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello   world  "), "hello world");
        assert_eq!(normalize_whitespace("Nathan\n\t Rourke"), "Nathan Rourke");
    }

    #[test]
    fn test_player_id_from_href() {
        assert_eq!(
            player_id_from_href("/players/nathan-rourke/160923/").as_deref(),
            Some("160923")
        );
        assert_eq!(
            player_id_from_href("https://www.cfl.ca/players/bo-levi-mitchell/15547").as_deref(),
            Some("15547")
        );
        assert_eq!(
            player_id_from_href("/players/x/123/?tab=stats").as_deref(),
            Some("123")
        );
        assert_eq!(player_id_from_href("/players/no-id/"), None);
    }
}
