use std::sync::OnceLock;

use regex::Regex;

/// Trims `s` and folds every run of whitespace (including `&nbsp;`) into one space.
pub fn collapse_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[\s\u{00A0}]+").expect("regex should be valid"));
    re.replace_all(s, " ").trim().to_string()
}
