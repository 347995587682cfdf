//! Advisory 1–3 difficulty rating. Display only.

use crate::types::CipherType;

/// Rating for tags that do not name a known cipher.
pub const UNKNOWN_CIPHER_DIFFICULTY: u8 = 2;

/// Rate a message by cipher type and length in characters.
pub fn difficulty(plaintext: &str, cipher_type: CipherType) -> u8 {
    let length = plaintext.chars().count();
    match cipher_type {
        CipherType::Shift => match length {
            0..=19 => 1,
            20..=49 => 2,
            _ => 3,
        },
        CipherType::Substitution => {
            if length < 15 {
                2
            } else {
                3
            }
        }
        CipherType::ReversibleEncoding => 1,
    }
}

/// Rate a message whose cipher is given as a storage tag.
pub fn difficulty_for_tag(plaintext: &str, tag: &str) -> u8 {
    tag.parse::<CipherType>()
        .map(|cipher_type| difficulty(plaintext, cipher_type))
        .unwrap_or(UNKNOWN_CIPHER_DIFFICULTY)
}
