use sha2::{Digest, Sha256};

/// Content fingerprint of an upload: SHA-256 over the raw bytes, lowercase
/// hex. Identical bytes always produce the identical digest, which is what
/// backs exact duplicate detection.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic_and_fixed_length() {
        let first = sha256_hex(b"some image bytes");
        let second = sha256_hex(b"some image bytes");

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty input.
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_distinct_inputs_produce_distinct_digests() {
        assert_ne!(sha256_hex(b"image one"), sha256_hex(b"image two"));
    }
}
