//! Password digests in the format stored by the `password` table.
//!
//! A digest is the base64 encoding of MD5 over the password bytes. When
//! salting is enabled the experimenter id, as an 8-byte big-endian integer,
//! is prefixed to the password before hashing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};

/// How the experimenter id takes part in the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaltMode {
    Salted,
    Unsalted,
}

impl SaltMode {
    #[must_use]
    pub const fn from_no_salt(no_salt: bool) -> Self {
        if no_salt { Self::Unsalted } else { Self::Salted }
    }
}

#[must_use]
pub fn hash_password(plaintext: &str, mode: SaltMode, user_id: i64) -> String {
    let mut hasher = Md5::new();
    if mode == SaltMode::Salted {
        hasher.update(user_id.to_be_bytes());
    }
    hasher.update(plaintext.as_bytes());
    STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hash_password("ome", SaltMode::Salted, 0),
            "PJueOtwuTPHB8Nq/1rFVxg=="
        );
        assert_eq!(
            hash_password("ome", SaltMode::Salted, 1),
            "pvL5Tyr9tCD2esF938sHEQ=="
        );
        assert_eq!(
            hash_password("ome", SaltMode::Unsalted, 0),
            "vvFwuczAmpyoRC0Nsv8FCw=="
        );
    }

    #[test]
    fn test_deterministic() {
        for mode in [SaltMode::Salted, SaltMode::Unsalted] {
            assert_eq!(
                hash_password("secret", mode, 42),
                hash_password("secret", mode, 42)
            );
        }
    }

    #[test]
    fn test_unsalted_ignores_user_id() {
        assert_eq!(
            hash_password("ome", SaltMode::Unsalted, 0),
            hash_password("ome", SaltMode::Unsalted, 1)
        );
    }

    #[test]
    fn test_salted_depends_on_user_id() {
        assert_ne!(
            hash_password("ome", SaltMode::Salted, 0),
            hash_password("ome", SaltMode::Salted, 1)
        );
    }

    #[test]
    fn test_salt_mode_from_flag() {
        assert_eq!(SaltMode::from_no_salt(true), SaltMode::Unsalted);
        assert_eq!(SaltMode::from_no_salt(false), SaltMode::Salted);
    }
}
