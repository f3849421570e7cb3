//! Cache key generators for consistent key naming.

use babel_core::LanguageTag;

/// Generate the cache key for a translation of `text` into `target`.
///
/// The key is `<target>-<text>` using the normalized tag, so `ES`/`es` share
/// one entry while the text is kept byte-for-byte.
#[must_use]
pub fn translation(target: &LanguageTag, text: &str) -> String {
    format!("{}-{}", target, text)
}
