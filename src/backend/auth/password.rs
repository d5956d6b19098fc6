/**
 * Password Hashing
 *
 * bcrypt hashing with a per-call random salt. The work factor is fixed for the
 * lifetime of the process (`BCRYPT_COST`, default 10), which keeps a single
 * verification in the tens of milliseconds on commodity hardware.
 *
 * bcrypt is CPU-bound, so both operations run on tokio's blocking pool and the
 * calling request simply awaits them.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused outright rather than silently truncated, so two passwords that share
 * a 72-byte prefix never verify against each other's digest.
 */

use bcrypt::{non_truncating_hash, non_truncating_verify};

use crate::backend::error::HashError;
use crate::shared::config::DEFAULT_BCRYPT_COST;

/// Longest password bcrypt can take without truncating, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted one-way password hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` with a fresh salt
    ///
    /// Two calls with the same input return different digests. Input longer
    /// than `MAX_PASSWORD_BYTES` is `HashError::PasswordTooLong`.
    pub async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashError::PasswordTooLong(plaintext.len()));
        }
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || non_truncating_hash(plaintext, cost))
            .await
            .map_err(|e| HashError::Hashing(format!("hashing task failed: {}", e)))?
            .map_err(|e| HashError::Hashing(e.to_string()))
    }

    /// Check `plaintext` against a stored digest
    ///
    /// A wrong password is `Ok(false)`, and so is one longer than
    /// `MAX_PASSWORD_BYTES`, since no such password was ever hashed. Only a
    /// digest that cannot be parsed is an error.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || non_truncating_verify(plaintext, &digest))
            .await
            .map_err(|e| HashError::Hashing(format!("verification task failed: {}", e)))?
            .map_err(|e| HashError::InvalidDigestFormat(e.to_string()))
    }
}
