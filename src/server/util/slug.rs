//! Title slugs for ideas.
//!
//! A slug is the lowercased ASCII form of a title joined by hyphens, truncated and suffixed with
//! a short random string so that ideas with identical titles still get distinct addresses.

use once_cell::sync::Lazy;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of a stored slug, matching the `title_slug` column.
pub const SLUG_MAX_LENGTH: usize = 50;

/// Length of the random suffix appended to every slug.
pub const SUFFIX_LENGTH: usize = 5;

/// Number of slugs generated before giving up on finding an unused one.
pub const MAX_SLUG_ATTEMPTS: usize = 10;

static INVALID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid slug character regex"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("valid slug separator regex"));

/// Converts `value` to a URL safe slug.
///
/// The value is decomposed (NFKD) and characters left outside ASCII are dropped, so accented
/// letters keep their base letter. The rest is lowercased, anything that isn't alphanumeric,
/// an underscore, a hyphen or whitespace is removed, and runs of hyphens and whitespace become
/// a single hyphen. Leading and trailing hyphens and underscores are stripped.
pub fn slugify(value: &str) -> String {
    let ascii: String = value
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase();

    let cleaned = INVALID_CHARS.replace_all(&ascii, "");
    let joined = SEPARATORS.replace_all(&cleaned, "-");

    joined.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Random mixed case alphanumeric string of `length` characters.
pub fn random_suffix(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Builds a candidate slug for `title` that fits in [`SLUG_MAX_LENGTH`].
///
/// The slugified title is cut so that a hyphen and a [`SUFFIX_LENGTH`] long random suffix fit
/// after it. Titles without any usable characters produce the suffix alone.
pub fn custom_slugify(title: &str) -> String {
    let suffix = random_suffix(SUFFIX_LENGTH);
    let base = slugify(title);

    let max_base = SLUG_MAX_LENGTH - SUFFIX_LENGTH - 1;
    let base: String = base.chars().take(max_base).collect();
    let base = base.trim_end_matches('-');

    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}
