//! Positional placeholder substitution.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ARG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\d+)\}").unwrap());

/// Replace `{1}`, `{2}`, ... with the matching 1-indexed argument.
///
/// Placeholders without an argument (including `{0}`) are left as-is.
pub fn replace_args<A: AsRef<str>>(s: &str, args: &[A]) -> String {
    ARG_RE
        .replace_all(s, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| args.get(i))
                .map(|arg| arg.as_ref().to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
