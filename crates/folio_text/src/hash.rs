use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of `content`, stable across runs and suitable
/// for change detection and cache keys.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
