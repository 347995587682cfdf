use cryptowall_cipher::{CipherEngine, SeedSource, DEFAULT_SHIFT};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WallError};

/// Wall settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Alias stored when the author leaves it blank.
    pub default_author_alias: String,
    /// Longest accepted message, in characters.
    pub max_plaintext_chars: usize,
    /// Page size when the caller gives none.
    pub default_page_size: usize,
    /// Upper bound on any page size.
    pub max_page_size: usize,
    /// Seed material for substitution keys.
    pub substitution_seed: SeedSource,
    /// Offset for the shift cipher.
    pub shift: i32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            default_author_alias: "Анонимус".to_string(),
            max_plaintext_chars: 280,
            default_page_size: 50,
            max_page_size: 200,
            substitution_seed: SeedSource::Plaintext,
            shift: DEFAULT_SHIFT,
        }
    }
}

impl WallConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_author_alias.trim().is_empty() {
            return Err(WallError::Config(
                "default_author_alias must not be blank".into(),
            ));
        }
        if self.max_plaintext_chars == 0 {
            return Err(WallError::Config(
                "max_plaintext_chars must be positive".into(),
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(WallError::Config(format!(
                "default_page_size must be in 1..={}, got {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }

    /// Cipher engine configured from these settings.
    pub fn engine(&self) -> CipherEngine {
        CipherEngine::new(self.shift, self.substitution_seed.clone())
    }
}
