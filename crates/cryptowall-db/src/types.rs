//! Records kept on the wall and the inputs/outputs of wall operations.

use chrono::{DateTime, Utc};
use cryptowall_cipher::{CipherMetadata, CipherType, EncryptionResult, Epoch};
use serde::{Deserialize, Serialize};

/// A stored message. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub author_alias: String,
    pub epoch: Epoch,
    pub cipher_type: CipherType,
    pub ciphertext: String,
    /// Answer key. Only revealed to a solver after a correct guess.
    pub plaintext: String,
    pub difficulty: u8,
    pub metadata: CipherMetadata,
}

/// Fields for a message about to be inserted. The store assigns id and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub author_alias: String,
    pub epoch: Epoch,
    pub cipher_type: CipherType,
    pub ciphertext: String,
    pub plaintext: String,
    pub difficulty: u8,
    pub metadata: CipherMetadata,
}

impl NewMessage {
    pub fn from_encryption(
        author_alias: impl Into<String>,
        epoch: Epoch,
        encrypted: EncryptionResult,
        difficulty: u8,
    ) -> Self {
        Self {
            author_alias: author_alias.into(),
            epoch,
            cipher_type: encrypted.cipher_type,
            ciphertext: encrypted.ciphertext,
            plaintext: encrypted.plaintext,
            difficulty,
            metadata: encrypted.metadata,
        }
    }

    pub(crate) fn into_message(self, id: String, created_at: DateTime<Utc>) -> Message {
        Message {
            id,
            created_at,
            author_alias: self.author_alias,
            epoch: self.epoch,
            cipher_type: self.cipher_type,
            ciphertext: self.ciphertext,
            plaintext: self.plaintext,
            difficulty: self.difficulty,
            metadata: self.metadata,
        }
    }
}

/// What a solver may see: no plaintext, no key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMessage {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub author_alias: String,
    pub epoch: Epoch,
    pub cipher_type: CipherType,
    pub ciphertext: String,
    pub difficulty: u8,
}

impl From<&Message> for PublicMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            created_at: message.created_at,
            author_alias: message.author_alias.clone(),
            epoch: message.epoch,
            cipher_type: message.cipher_type,
            ciphertext: message.ciphertext.clone(),
            difficulty: message.difficulty,
        }
    }
}

impl From<Message> for PublicMessage {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            created_at: message.created_at,
            author_alias: message.author_alias,
            epoch: message.epoch,
            cipher_type: message.cipher_type,
            ciphertext: message.ciphertext,
            difficulty: message.difficulty,
        }
    }
}

/// Request to post a message on the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessage {
    #[serde(default)]
    pub author_alias: Option<String>,
    pub plaintext: String,
    pub epoch: Epoch,
}

impl CreateMessage {
    pub fn new(plaintext: impl Into<String>, epoch: Epoch) -> Self {
        Self {
            author_alias: None,
            plaintext: plaintext.into(),
            epoch,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.author_alias = Some(alias.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedMessage {
    pub id: String,
    pub ciphertext: String,
    pub difficulty: u8,
}

/// Result of a decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOutcome {
    pub correct: bool,
    /// Set only when `correct` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}
