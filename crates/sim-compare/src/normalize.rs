//! Text canonicalization for comparison.
//!
//! Rules, applied in order:
//! - lowercase every character (Unicode-aware, locale-independent);
//! - drop everything that is not `a-z`, `0-9` or whitespace;
//! - collapse each whitespace run into a single space;
//! - trim leading and trailing whitespace.
//!
//! Non-ASCII letters are dropped, not transliterated:
//!   "Café au lait!" → "caf au lait"

use std::fmt;

use serde::Serialize;

use sim_core::content_digest;

// ---------------------------------------------------------------------------
// NormalizedText
// ---------------------------------------------------------------------------

/// Output of [`normalize`]: a string over `[a-z0-9 ]` with no leading,
/// trailing or doubled spaces.
///
/// Only [`normalize`] builds values of this type, so every instance upholds
/// the invariant and byte offsets are always char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes, which equals the length in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex SHA256 of the normalized text.
    pub fn digest(&self) -> String {
        content_digest(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Canonicalize `raw` into a [`NormalizedText`].
///
/// Total and idempotent: `normalize(normalize(s).as_str()) == normalize(s)`.
/// Punctuation is removed before whitespace is collapsed, so `"a , b"`
/// becomes `"a b"` rather than `"a  b"`.
pub fn normalize(raw: &str) -> NormalizedText {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars().flat_map(char::to_lowercase) {
        if is_separator(ch) {
            // Leading whitespace never produces a space.
            pending_space = !out.is_empty();
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    NormalizedText(out)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Whitespace as understood by the reference tooling: Unicode `White_Space`
/// plus the ASCII information separators U+001C..U+001F.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1C}'..='\u{1F}')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
