//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key from an operation name and parameters.
///
/// The key is the operation name followed by a SHA-256 hash of the sorted
/// parameters, so parameter order never matters. Callers must pass every
/// parameter that affects the result, pagination included.
pub fn cache_key(operation: &str, params: &[(&str, &str)]) -> String {
    let mut hasher = Sha256::new();

    // Sort params for a deterministic key
    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort();

    for (k, v) in sorted_params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{}:{:x}", operation, hasher.finalize())
}

/// Key for a single recipe lookup
pub fn recipe_key(id: &str) -> String {
    format!("recipe_{}", id)
}
