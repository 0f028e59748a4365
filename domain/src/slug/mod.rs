mod rules;

use rules::{
    aliases::apply_slug_aliases, charset::strip_non_slug_chars,
    whitespace::hyphenate_whitespace,
};

/// Turns a display name into the key used for author scoping and page links,
/// e.g. "Dan Jones" -> "dan-jones" or "Formula One" -> "formula-1".
///
/// Steps run in a fixed order: lowercase, hyphenate whitespace, strip everything
/// outside `[a-z0-9-]`, rewrite aliases. Edge whitespace is not trimmed, it becomes
/// a hyphen like any other run. Never fails; empty input gives an empty key.
pub fn normalize_name(name: &str) -> String {
    let s = name.to_lowercase();
    let s = hyphenate_whitespace(&s);
    let s = strip_non_slug_chars(&s);
    apply_slug_aliases(&s)
}

/// True when both names normalize to the same key.
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
