use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decomposes and drops combining marks: `"hellà"` becomes `"hella"`.
///
/// Code points that do not decompose into a base letter plus marks (`ß`,
/// `œ`, …) pass through unchanged, so the stripped alphabet is not forced
/// down to ASCII.
#[must_use]
pub fn strip_accents(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
