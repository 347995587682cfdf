//! Teaching ciphers for the cryptowall quest: shift, substitution and base64.
//!
//! None of these transforms are secure. Everything here is pure and
//! synchronous; no call shares state with another.
//!
//! ```
//! use cryptowall_cipher::{difficulty, encrypt, verify, Epoch};
//!
//! let cipher = Epoch::Proto.cipher_type();
//! let result = encrypt("привет мир", cipher);
//! assert_eq!(result.ciphertext, "тулеих плу");
//! assert_eq!(difficulty(&result.plaintext, cipher), 1);
//! assert!(verify("Привет Мир", &result.plaintext));
//! ```

pub mod alphabet;
pub mod catalog;
pub mod difficulty;
pub mod digital;
pub mod engine;
pub mod error;
pub mod shift;
pub mod substitution;
pub mod types;

pub use catalog::DIGITAL_DEMO_HINT;
pub use difficulty::{difficulty, difficulty_for_tag, UNKNOWN_CIPHER_DIFFICULTY};
pub use digital::{decode_digital, encode_digital, try_decode_digital};
pub use engine::{decrypt, encrypt, encrypt_tagged, verify, CipherEngine, SeedSource};
pub use error::CipherError;
pub use shift::{decrypt_shift, encrypt_shift, DEFAULT_SHIFT};
pub use substitution::{
    decrypt_substitution, encrypt_substitution, generate_substitution_map, SubstitutionMap,
    DEFAULT_SEED,
};
pub use types::{CipherMetadata, CipherType, EncryptionResult, Epoch};
