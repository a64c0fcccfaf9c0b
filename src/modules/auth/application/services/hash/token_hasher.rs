use sha2::{Digest, Sha256};

/// Password-reset tokens are stored hashed: a leaked `users.json` must not
/// contain a usable token.
pub fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());

    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_token("abc"), hash_token("abc"));
    }

    #[test]
    fn different_tokens_hash_differently() {
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }

    #[test]
    fn output_is_sha256_hex() {
        let hash = hash_token("abc");

        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
