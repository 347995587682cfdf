//! Wall — message creation, browsing and guess verification over a store.

use cryptowall_cipher::{difficulty, verify, CipherEngine};

use crate::config::WallConfig;
use crate::error::{Result, WallError};
use crate::storage::MessageStore;
use crate::types::{CreateMessage, CreatedMessage, NewMessage, PublicMessage, VerifyOutcome};

pub struct Wall<S: MessageStore> {
    store: S,
    engine: CipherEngine,
    config: WallConfig,
}

impl<S: MessageStore> Wall<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            engine: CipherEngine::default(),
            config: WallConfig::default(),
        }
    }

    pub fn with_config(store: S, config: WallConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            engine: config.engine(),
            config,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Validate, encrypt, rate and persist a new message.
    pub fn create_message(&self, input: CreateMessage) -> Result<CreatedMessage> {
        if input.plaintext.trim().is_empty() {
            tracing::warn!("rejected empty message");
            return Err(WallError::EmptyPlaintext);
        }
        let length = input.plaintext.chars().count();
        if length > self.config.max_plaintext_chars {
            tracing::warn!(length, max = self.config.max_plaintext_chars, "rejected long message");
            return Err(WallError::PlaintextTooLong {
                max: self.config.max_plaintext_chars,
                got: length,
            });
        }

        let author_alias = input
            .author_alias
            .as_deref()
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .unwrap_or(self.config.default_author_alias.as_str())
            .to_string();

        let cipher_type = input.epoch.cipher_type();
        let rating = difficulty(&input.plaintext, cipher_type);
        let encrypted = self.engine.encrypt(&input.plaintext, cipher_type);

        let stored = self.store.insert(NewMessage::from_encryption(
            author_alias,
            input.epoch,
            encrypted,
            rating,
        ))?;

        tracing::info!(
            id = %stored.id,
            epoch = %stored.epoch,
            cipher = %stored.cipher_type,
            difficulty = stored.difficulty,
            "message posted"
        );

        Ok(CreatedMessage {
            id: stored.id,
            ciphertext: stored.ciphertext,
            difficulty: stored.difficulty,
        })
    }

    /// Solver view of one message.
    pub fn message(&self, id: &str) -> Result<PublicMessage> {
        match self.store.get(id)? {
            Some(message) => Ok(message.into()),
            None => {
                tracing::warn!(id, "message not found");
                Err(WallError::NotFound(id.to_string()))
            }
        }
    }

    /// Newest messages first. `None` uses the configured default page size.
    pub fn latest_messages(&self, limit: Option<usize>) -> Result<Vec<PublicMessage>> {
        let limit = limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        Ok(self
            .store
            .latest(limit)?
            .into_iter()
            .map(PublicMessage::from)
            .collect())
    }

    /// A uniformly chosen message, or `None` when the wall is empty.
    pub fn random_message(&self) -> Result<Option<PublicMessage>> {
        let count = self.store.count()?;
        if count == 0 {
            return Ok(None);
        }
        let offset = random_below(count)?;
        Ok(self.store.nth(offset)?.map(PublicMessage::from))
    }

    /// Check a guess. The original text comes back only when it is right.
    pub fn verify_decryption(&self, id: &str, guess: &str) -> Result<VerifyOutcome> {
        let message = self.store.get(id)?.ok_or_else(|| {
            tracing::warn!(id, "guess for unknown message");
            WallError::NotFound(id.to_string())
        })?;

        let correct = verify(guess, &message.plaintext);
        tracing::debug!(id, correct, "decryption attempt");

        Ok(VerifyOutcome {
            correct,
            original_text: correct.then_some(message.plaintext),
        })
    }
}

fn random_below(bound: usize) -> Result<usize> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).map_err(|e| WallError::Rng(e.to_string()))?;
    Ok((u64::from_le_bytes(buf) % bound as u64) as usize)
}
