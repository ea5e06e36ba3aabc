//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// SHA-256 of the decoded CSV text, hex encoded.
///
/// Lets clients tell whether two server instances serve the same dataset.
pub fn dataset_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
