//! Illustrative private-key generation: raw random bytes, a batch of
//! independent random keys, and a deterministic derivation from a seed
//! string via SHA-256. Development and testing only; nothing is persisted.

use crate::errors::AppResult;
use alloy::primitives::{Address, B256};
use alloy::signers::local::PrivateKeySigner;
use rand::Rng;
use sha2::{Digest, Sha256};

/// A freshly derived key pair, ready to print.
pub struct GeneratedAccount {
    pub private_key: B256,
    /// The uncompressed SEC1 public key, hex encoded.
    pub public_key: String,
    pub address: Address,
}

impl GeneratedAccount {
    fn from_key_bytes(bytes: [u8; 32]) -> AppResult<Self> {
        let signer = PrivateKeySigner::from_slice(&bytes)?;
        let public_key = signer
            .credential()
            .verifying_key()
            .to_encoded_point(false);

        Ok(Self {
            private_key: B256::from(bytes),
            public_key: format!("0x{}", alloy::hex::encode(public_key.as_bytes())),
            address: signer.address(),
        })
    }
}

/// Method 1: a single account from random key bytes.
pub fn random_account() -> AppResult<GeneratedAccount> {
    let bytes: [u8; 32] = rand::rng().random();
    GeneratedAccount::from_key_bytes(bytes)
}

/// Method 2: several independent random accounts, useful for test fixtures.
pub fn random_accounts(count: usize) -> AppResult<Vec<GeneratedAccount>> {
    (0..count).map(|_| random_account()).collect()
}

/// Method 3: a deterministic account derived from a seed string through a
/// one-way hash. The same seed always yields the same key and address.
pub fn deterministic_account(seed: &str) -> AppResult<GeneratedAccount> {
    let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
    GeneratedAccount::from_key_bytes(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_accounts_are_distinct() {
        let accounts = random_accounts(3).unwrap();
        assert_eq!(accounts.len(), 3);
        assert_ne!(accounts[0].address, accounts[1].address);
        assert_ne!(accounts[1].address, accounts[2].address);
        assert_ne!(accounts[0].private_key, accounts[1].private_key);
    }

    #[test]
    fn deterministic_derivation_is_stable() {
        let seed = "test-seed-phrase-for-development";
        let first = deterministic_account(seed).unwrap();
        let second = deterministic_account(seed).unwrap();
        assert_eq!(first.private_key, second.private_key);
        assert_eq!(first.address, second.address);

        let other = deterministic_account("another-seed").unwrap();
        assert_ne!(first.address, other.address);
    }

    #[test]
    fn public_key_is_uncompressed_sec1() {
        let account = random_account().unwrap();
        // 0x04 tag plus two 32-byte coordinates
        assert_eq!(account.public_key.len(), 2 + 65 * 2);
        assert!(account.public_key.starts_with("0x04"));
    }
}
