use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::substitution::SubstitutionMap;

/// Thematic period a message author picks. Each epoch resolves to exactly
/// one [`CipherType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Epoch {
    Proto,
    Industrial,
    Home,
    Digital,
}

impl Epoch {
    pub const ALL: [Epoch; 4] = [
        Epoch::Proto,
        Epoch::Industrial,
        Epoch::Home,
        Epoch::Digital,
    ];

    /// Storage tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Epoch::Proto => "proto",
            Epoch::Industrial => "industrial",
            Epoch::Home => "home",
            Epoch::Digital => "digital",
        }
    }

    /// Static epoch → cipher table.
    pub fn cipher_type(self) -> CipherType {
        match self {
            Epoch::Proto => CipherType::Shift,
            Epoch::Industrial | Epoch::Home => CipherType::Substitution,
            Epoch::Digital => CipherType::ReversibleEncoding,
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Epoch {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Epoch::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| CipherError::UnknownEpoch(s.to_string()))
    }
}

/// Transform family applied to a message.
///
/// Tags follow the stored records: `caesar`, `substitution`, `digital_demo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherType {
    #[serde(rename = "caesar")]
    Shift,
    #[serde(rename = "substitution")]
    Substitution,
    #[serde(rename = "digital_demo")]
    ReversibleEncoding,
}

impl CipherType {
    pub const ALL: [CipherType; 3] = [
        CipherType::Shift,
        CipherType::Substitution,
        CipherType::ReversibleEncoding,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CipherType::Shift => "caesar",
            CipherType::Substitution => "substitution",
            CipherType::ReversibleEncoding => "digital_demo",
        }
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherType {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CipherError::UnknownCipherType(s.to_string()))
    }
}

/// Cipher-specific data needed to reverse or describe an encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher")]
pub enum CipherMetadata {
    #[serde(rename = "caesar")]
    Shift { shift: i32 },
    #[serde(rename = "substitution")]
    Substitution { map: SubstitutionMap },
    #[serde(rename = "digital_demo")]
    ReversibleEncoding,
}

impl CipherMetadata {
    pub fn cipher_type(&self) -> CipherType {
        match self {
            CipherMetadata::Shift { .. } => CipherType::Shift,
            CipherMetadata::Substitution { .. } => CipherType::Substitution,
            CipherMetadata::ReversibleEncoding => CipherType::ReversibleEncoding,
        }
    }
}

/// Output of a single encryption. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    pub ciphertext: String,
    /// The original text, kept for answer verification.
    pub plaintext: String,
    pub cipher_type: CipherType,
    pub metadata: CipherMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn epoch_table() {
        assert_eq!(Epoch::Proto.cipher_type(), CipherType::Shift);
        assert_eq!(Epoch::Industrial.cipher_type(), CipherType::Substitution);
        assert_eq!(Epoch::Home.cipher_type(), CipherType::Substitution);
        assert_eq!(
            Epoch::Digital.cipher_type(),
            CipherType::ReversibleEncoding
        );
    }

    #[test]
    fn tags_parse_back() {
        for epoch in Epoch::ALL {
            assert_eq!(epoch.as_str().parse::<Epoch>().unwrap(), epoch);
        }
        for cipher in CipherType::ALL {
            assert_eq!(cipher.as_str().parse::<CipherType>().unwrap(), cipher);
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        assert_eq!(
            "vigenere".parse::<CipherType>(),
            Err(CipherError::UnknownCipherType("vigenere".into()))
        );
        assert_eq!(
            "Proto".parse::<Epoch>(),
            Err(CipherError::UnknownEpoch("Proto".into()))
        );
    }

    #[test]
    fn serde_uses_storage_tags() {
        assert_eq!(
            serde_json::to_value(CipherType::ReversibleEncoding).unwrap(),
            json!("digital_demo")
        );
        assert_eq!(serde_json::to_value(Epoch::Home).unwrap(), json!("home"));
    }

    #[test]
    fn metadata_is_tagged() {
        let shift = CipherMetadata::Shift { shift: 3 };
        assert_eq!(
            serde_json::to_value(&shift).unwrap(),
            json!({"cipher": "caesar", "shift": 3})
        );
        assert_eq!(
            serde_json::to_value(CipherMetadata::ReversibleEncoding).unwrap(),
            json!({"cipher": "digital_demo"})
        );
        let back: CipherMetadata =
            serde_json::from_value(json!({"cipher": "caesar", "shift": -5})).unwrap();
        assert_eq!(back, CipherMetadata::Shift { shift: -5 });
        assert_eq!(back.cipher_type(), CipherType::Shift);
    }
}
