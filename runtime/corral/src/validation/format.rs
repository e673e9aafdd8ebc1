//! The fixed format validators: `email` and `phone`.

use std::sync::LazyLock;

use regex::Regex;

// `local-part@domain.tld`: domain labels restricted to alphanumerics, hyphens
// and dots, TLD at least two letters. Deliberately conservative; the format
// validators assume trimmed, lower-cased input (see the walker's rule order),
// though the pattern tolerates uppercase for targets that skip `trimlower`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("The email pattern is a valid regex")
});

pub(super) fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Strip a phone number down to ASCII digits, `+`, and the `x` extension
/// marker; everything else (spaces, punctuation, other letters) is dropped.
///
/// Returns `None` when fewer than 10 characters survive. Note that `ext`
/// collapses to `x`: the `e` and `t` fall out of the keep-set.
pub(super) fn normalize_phone(value: &str) -> Option<String> {
    let normalized: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | 'x'))
        .collect();
    (normalized.len() >= 10).then_some(normalized)
}
