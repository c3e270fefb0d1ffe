//! Secret sealing and verification
//!
//! Sealed secrets have the form `sha256$<salt hex>$<digest hex>` where the
//! digest is SHA-256 over the salt bytes followed by the secret.

use crate::config::SecretPolicy;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Produce the string stored for `secret` under `policy`
pub fn seal(policy: SecretPolicy, secret: &str) -> String {
    match policy {
        SecretPolicy::Plaintext => secret.to_string(),
        SecretPolicy::SaltedSha256 => {
            let mut salt = [0u8; SALT_LEN];
            rand::thread_rng().fill_bytes(&mut salt);
            format!("{}${}${}", SCHEME, hex::encode(salt), hex::encode(digest(&salt, secret)))
        }
    }
}

/// Check a supplied secret against a stored one
///
/// Under `Plaintext` the comparison is exact string equality, whatever the
/// stored string looks like. Under `SaltedSha256` unsealed entries fall back to
/// exact equality. Any entry that parses as sealed is only ever checked as a
/// digest, so the stored string itself is never accepted as the secret.
pub fn verify(policy: SecretPolicy, stored: &str, supplied: &str) -> bool {
    match policy {
        SecretPolicy::Plaintext => stored == supplied,
        SecretPolicy::SaltedSha256 => match parse_sealed(stored) {
            Some((salt, expected)) => digest(&salt, supplied)
                .as_slice()
                .ct_eq(expected.as_slice())
                .into(),
            None => stored == supplied,
        },
    }
}

/// Whether a stored secret is in sealed form
pub fn is_sealed(stored: &str) -> bool {
    parse_sealed(stored).is_some()
}

fn digest(salt: &[u8], secret: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(secret.as_bytes());
    hasher.finalize().to_vec()
}

fn parse_sealed(stored: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut parts = stored.splitn(3, '$');
    if parts.next()? != SCHEME {
        return None;
    }
    let salt = hex::decode(parts.next()?).ok()?;
    let digest = hex::decode(parts.next()?).ok()?;
    if salt.len() != SALT_LEN || digest.len() != 32 {
        return None;
    }
    Some((salt, digest))
}
