//! Alphabets shared by the letter ciphers.
//!
//! Letters are stored in lowercase canonical form. Uppercase input is matched
//! against the single-character uppercase form of each letter, so characters
//! whose case mapping expands (or that only fold onto a letter, like the
//! Kelvin sign) are never treated as alphabet members.

/// 32-letter Russian alphabet (without ё).
pub const CYRILLIC: &str = "абвгдежзийклмнопрстуфхцчшщъыьэюя";

/// 26-letter Latin alphabet.
pub const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase form of a lowercase letter, if it is a single character.
pub(crate) fn to_upper(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => letter,
    }
}

/// Position of `c` in `alphabet`, plus whether `c` was uppercase.
pub(crate) fn locate(alphabet: &str, c: char) -> Option<(usize, bool)> {
    alphabet
        .chars()
        .position(|l| l == c)
        .map(|i| (i, false))
        .or_else(|| {
            alphabet
                .chars()
                .position(|l| to_upper(l) == c)
                .map(|i| (i, true))
        })
}

/// Restore case on a lowercase letter.
pub(crate) fn with_case(letter: char, upper: bool) -> char {
    if upper {
        to_upper(letter)
    } else {
        letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CYRILLIC.chars().count(), 32);
        assert_eq!(LATIN.chars().count(), 26);
    }

    #[test]
    fn locate_both_cases() {
        assert_eq!(locate(CYRILLIC, 'а'), Some((0, false)));
        assert_eq!(locate(CYRILLIC, 'Я'), Some((31, true)));
        assert_eq!(locate(LATIN, 'Z'), Some((25, true)));
        assert_eq!(locate(CYRILLIC, 'ё'), None);
        assert_eq!(locate(LATIN, '1'), None);
    }

    #[test]
    fn kelvin_sign_is_not_a_letter() {
        // U+212A lowercases to 'k' but is not the uppercase form of 'k'
        assert_eq!(locate(LATIN, '\u{212A}'), None);
    }
}
