//! Message wall for the cryptowall quest.
//!
//! Wires the ciphers from `cryptowall-cipher` to a record store: post a
//! message under an epoch, browse the wall, and check decryption guesses.
//! Plaintext never leaves the store except on a correct guess.
//!
//! ```
//! use cryptowall_cipher::Epoch;
//! use cryptowall_db::{CreateMessage, MemoryStore, Wall};
//!
//! let wall = Wall::new(MemoryStore::new());
//! let created = wall
//!     .create_message(CreateMessage::new("привет мир", Epoch::Proto))
//!     .unwrap();
//! assert_eq!(created.ciphertext, "тулеих плу");
//! assert!(wall.verify_decryption(&created.id, "Привет Мир").unwrap().correct);
//! ```

pub mod config;
pub mod error;
pub mod storage;
pub mod types;
pub mod wall;

pub use config::WallConfig;
pub use error::{Result, WallError};
#[cfg(feature = "sqlite")]
pub use storage::SqliteStore;
pub use storage::{MemoryStore, MessageStore};
pub use types::{
    CreateMessage, CreatedMessage, Message, NewMessage, PublicMessage, VerifyOutcome,
};
pub use wall::Wall;
