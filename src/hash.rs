//! Content fingerprinting for change detection.
//!
//! A short SHA-256 prefix over the identity fields of an announcement lets
//! repeated scrapes recognize an unchanged announcement without comparing
//! the full text.

use sha2::{Digest, Sha256};

/// Length of the stored fingerprint, in hex characters.
const FINGERPRINT_LEN: usize = 16;

/// Fingerprint the identity fields of an announcement.
///
/// Provider, model, and the two dates are what make an announcement "the
/// same" across scrapes; descriptive text can be rephrased without moving
/// the fingerprint.
pub fn content_fingerprint(
    provider: &str,
    model_id: &str,
    shutdown_date: &str,
    announcement_date: &str,
) -> String {
    short_hash(&format!(
        "{}|{}|{}|{}",
        provider, model_id, shutdown_date, announcement_date
    ))
}

/// First 16 hex characters of the SHA-256 digest of `content`.
pub fn short_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..FINGERPRINT_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fingerprint() {
        assert_eq!(
            content_fingerprint("OpenAI", "gpt-4-32k-0613", "2025-01-01", "2024-01-01"),
            "70183dd6388c56b4"
        );
    }

    #[test]
    fn test_short_hash_shape() {
        let hash = short_hash("anything at all");
        assert_eq!(hash.len(), 16);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_empty_input_still_hashes() {
        // SHA-256 of the empty string, truncated
        assert_eq!(short_hash(""), "e3b0c44298fc1c14");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(short_hash("same input"), short_hash("same input"));
    }

    #[test]
    fn test_field_order_matters() {
        assert_ne!(
            content_fingerprint("OpenAI", "a", "b", "c"),
            content_fingerprint("OpenAI", "a", "c", "b")
        );
    }
}
