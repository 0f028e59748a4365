/// Slug spellings rewritten to the site's canonical form.
const SLUG_ALIASES: &[(&str, &str)] = &[("formula-one", "formula-1")];

/// Runs on the finished slug so that "Formula One", "formula-one" and spellings
/// with stripped punctuation in between all end up the same.
pub fn apply_slug_aliases(s: &str) -> String {
    SLUG_ALIASES
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}
