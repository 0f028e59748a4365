use regex::Regex;
use std::sync::OnceLock;

/// Drops everything outside `[a-z0-9-]`. Non-ASCII letters are dropped too, no folding.
pub fn strip_non_slug_chars(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^a-z0-9-]+").unwrap());

    re.replace_all(s, "").to_string()
}
