//! Dispatch layer: one `encrypt`/`verify` contract over all cipher types.

use serde::{Deserialize, Serialize};

use crate::digital::{decode_digital, encode_digital};
use crate::error::CipherError;
use crate::shift::{decrypt_shift, encrypt_shift, DEFAULT_SHIFT};
use crate::substitution::{
    decrypt_substitution, encrypt_substitution, generate_substitution_map, DEFAULT_SEED,
};
use crate::types::{CipherMetadata, CipherType, EncryptionResult};

/// Where substitution keys get their seed material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// Seed from the message text, so each distinct message gets its own key.
    #[default]
    Plaintext,
    /// Same seed for every message.
    Constant(String),
}

impl SeedSource {
    fn seed<'a>(&'a self, plaintext: &'a str) -> &'a str {
        match self {
            SeedSource::Plaintext => plaintext,
            SeedSource::Constant(seed) => seed,
        }
    }
}

/// Encryption settings. Stateless between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEngine {
    shift: i32,
    seed: SeedSource,
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            seed: SeedSource::default(),
        }
    }
}

impl CipherEngine {
    pub fn new(shift: i32, seed: SeedSource) -> Self {
        Self { shift, seed }
    }

    /// Engine that keys every substitution message with [`DEFAULT_SEED`].
    pub fn constant_seed() -> Self {
        Self::new(DEFAULT_SHIFT, SeedSource::Constant(DEFAULT_SEED.to_string()))
    }

    pub fn shift(&self) -> i32 {
        self.shift
    }

    pub fn seed_source(&self) -> &SeedSource {
        &self.seed
    }

    pub fn encrypt(&self, plaintext: &str, cipher_type: CipherType) -> EncryptionResult {
        let (ciphertext, metadata) = match cipher_type {
            CipherType::Shift => (
                encrypt_shift(plaintext, self.shift),
                CipherMetadata::Shift { shift: self.shift },
            ),
            CipherType::Substitution => {
                let map = generate_substitution_map(self.seed.seed(plaintext));
                (
                    encrypt_substitution(plaintext, &map),
                    CipherMetadata::Substitution { map },
                )
            }
            CipherType::ReversibleEncoding => {
                (encode_digital(plaintext), CipherMetadata::ReversibleEncoding)
            }
        };

        tracing::debug!(
            cipher = %cipher_type,
            chars = plaintext.chars().count(),
            "encrypted message"
        );

        EncryptionResult {
            ciphertext,
            plaintext: plaintext.to_string(),
            cipher_type,
            metadata,
        }
    }

    /// Encrypt with a cipher named by its storage tag.
    pub fn encrypt_tagged(
        &self,
        plaintext: &str,
        tag: &str,
    ) -> Result<EncryptionResult, CipherError> {
        let cipher_type = tag.parse::<CipherType>().map_err(|e| {
            tracing::error!(tag, "encrypt called with unknown cipher type");
            e
        })?;
        Ok(self.encrypt(plaintext, cipher_type))
    }
}

/// Encrypt with the default engine (shift 3, plaintext-seeded substitution).
pub fn encrypt(plaintext: &str, cipher_type: CipherType) -> EncryptionResult {
    CipherEngine::default().encrypt(plaintext, cipher_type)
}

/// Encrypt with the default engine, dispatching on a storage tag.
pub fn encrypt_tagged(plaintext: &str, tag: &str) -> Result<EncryptionResult, CipherError> {
    CipherEngine::default().encrypt_tagged(plaintext, tag)
}

/// Case- and surrounding-whitespace-insensitive exact match.
pub fn verify(guess: &str, stored_plaintext: &str) -> bool {
    guess.to_lowercase().trim() == stored_plaintext.to_lowercase().trim()
}

/// Apply the inverse transform described by `metadata`.
///
/// A malformed base64 ciphertext decodes to an empty string.
pub fn decrypt(ciphertext: &str, metadata: &CipherMetadata) -> String {
    match metadata {
        CipherMetadata::Shift { shift } => decrypt_shift(ciphertext, *shift),
        CipherMetadata::Substitution { map } => decrypt_substitution(ciphertext, map),
        CipherMetadata::ReversibleEncoding => decode_digital(ciphertext),
    }
}

impl EncryptionResult {
    /// Recover the plaintext from the ciphertext alone, using the metadata.
    pub fn decrypt(&self) -> String {
        decrypt(&self.ciphertext, &self.metadata)
    }
}
