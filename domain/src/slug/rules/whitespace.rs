use regex::Regex;
use std::sync::OnceLock;

/// Turns every run of whitespace into a single hyphen, including runs at either end.
pub fn hyphenate_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").unwrap());

    re.replace_all(s, "-").to_string()
}
