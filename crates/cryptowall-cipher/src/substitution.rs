//! Monoalphabetic substitution over the Cyrillic alphabet.
//!
//! Keys are permutations of the 32 lowercase letters, derived from a seed by a
//! hash-driven Fisher–Yates shuffle in 32-bit wrapping arithmetic. The map
//! itself is the answer key and is stored with each message; regeneration from
//! the seed is only a convenience.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::{locate, with_case, CYRILLIC};
use crate::error::CipherError;

/// Seed used when no message-specific material is supplied.
pub const DEFAULT_SEED: &str = "default";

/// Bijection from each lowercase Cyrillic letter to its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<char, char>",
    into = "BTreeMap<char, char>"
)]
pub struct SubstitutionMap {
    forward: BTreeMap<char, char>,
}

impl SubstitutionMap {
    /// Build a map from the shuffled alphabet: letter `i` maps to `shuffled[i]`.
    fn from_shuffled(shuffled: &[char]) -> Self {
        let forward = CYRILLIC.chars().zip(shuffled.iter().copied()).collect();
        Self { forward }
    }

    /// Replacement for a lowercase letter.
    pub fn get(&self, letter: char) -> Option<char> {
        self.forward.get(&letter).copied()
    }

    /// Map with keys and values swapped.
    pub fn inverse(&self) -> Self {
        let forward = self.forward.iter().map(|(&k, &v)| (v, k)).collect();
        Self { forward }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.forward.iter().map(|(&k, &v)| (k, v))
    }

    fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| match locate(CYRILLIC, c) {
                Some((index, upper)) => CYRILLIC
                    .chars()
                    .nth(index)
                    .and_then(|letter| self.get(letter))
                    .map(|mapped| with_case(mapped, upper))
                    .unwrap_or(c),
                None => c,
            })
            .collect()
    }
}

impl TryFrom<BTreeMap<char, char>> for SubstitutionMap {
    type Error = CipherError;

    fn try_from(forward: BTreeMap<char, char>) -> Result<Self, Self::Error> {
        if forward.len() != CYRILLIC.chars().count() {
            return Err(CipherError::InvalidSubstitutionMap(format!(
                "expected 32 entries, got {}",
                forward.len()
            )));
        }
        if let Some(stray) = forward
            .iter()
            .flat_map(|(&k, &v)| [k, v])
            .find(|c| !CYRILLIC.contains(*c))
        {
            return Err(CipherError::InvalidSubstitutionMap(format!(
                "'{stray}' is not a lowercase Cyrillic letter"
            )));
        }
        let mut targets: Vec<char> = forward.values().copied().collect();
        targets.sort_unstable();
        targets.dedup();
        if targets.len() != forward.len() {
            return Err(CipherError::InvalidSubstitutionMap(
                "two letters share a replacement".into(),
            ));
        }
        Ok(Self { forward })
    }
}

impl From<SubstitutionMap> for BTreeMap<char, char> {
    fn from(map: SubstitutionMap) -> Self {
        map.forward
    }
}

/// Running hash over the seed's UTF-16 code units: `hash * 31 + unit`, i32 wrapping.
fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Derive a deterministic key from `seed`.
///
/// Same seed, same map: every step uses explicit `i32` wrapping so the result
/// does not depend on platform integer width.
pub fn generate_substitution_map(seed: &str) -> SubstitutionMap {
    let mut shuffled: Vec<char> = CYRILLIC.chars().collect();
    let mut hash = seed_hash(seed);

    for i in (1..shuffled.len()).rev() {
        let span = (i + 1) as i32;
        let j = (hash.wrapping_mul(span).unsigned_abs() % span as u32) as usize;
        shuffled.swap(i, j);
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i as i32);
    }

    SubstitutionMap::from_shuffled(&shuffled)
}

/// Replace every Cyrillic letter through `map`, keeping case.
pub fn encrypt_substitution(text: &str, map: &SubstitutionMap) -> String {
    map.apply(text)
}

/// Undo [`encrypt_substitution`] with the same `map`.
pub fn decrypt_substitution(text: &str, map: &SubstitutionMap) -> String {
    map.inverse().apply(text)
}
