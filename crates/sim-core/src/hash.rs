use sha2::{Digest, Sha256};

/// Generic SHA256 helper — returns a lowercase hex-encoded digest.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// SHA256 of a normalized text.
///
/// Two documents with the same digest normalize to the same text and so
/// always score 100.0 against each other.
pub fn content_digest(normalized: &str) -> String {
    sha256_hex(normalized)
}
