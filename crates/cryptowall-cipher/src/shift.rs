//! Fixed-offset shift (Caesar) cipher over the Cyrillic and Latin alphabets.

use crate::alphabet::{locate, with_case, CYRILLIC, LATIN};

/// Shift used for the proto epoch.
pub const DEFAULT_SHIFT: i32 = 3;

/// Shift every letter `shift` positions forward, cyclically within its
/// alphabet. Case is kept; everything else passes through.
pub fn encrypt_shift(text: &str, shift: i32) -> String {
    shift_text(text, i64::from(shift))
}

/// Inverse of [`encrypt_shift`] for the same `shift`.
pub fn decrypt_shift(text: &str, shift: i32) -> String {
    // Widened so that negating i32::MIN cannot overflow.
    shift_text(text, -i64::from(shift))
}

fn shift_text(text: &str, shift: i64) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

fn shift_char(c: char, shift: i64) -> char {
    for alphabet in [CYRILLIC, LATIN] {
        if let Some((index, upper)) = locate(alphabet, c) {
            let size = alphabet.chars().count() as i64;
            let target = (index as i64 + shift).rem_euclid(size) as usize;
            return alphabet
                .chars()
                .nth(target)
                .map(|letter| with_case(letter, upper))
                .unwrap_or(c);
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_example() {
        assert_eq!(encrypt_shift("Hello, 123!", 3), "Khoor, 123!");
    }

    #[test]
    fn cyrillic_example() {
        assert_eq!(encrypt_shift("привет мир", DEFAULT_SHIFT), "тулеих плу");
        assert_eq!(encrypt_shift("Привет", DEFAULT_SHIFT), "Тулеих");
    }

    #[test]
    fn wraps_around_alphabet_end() {
        assert_eq!(encrypt_shift("xyz", 3), "abc");
        assert_eq!(encrypt_shift("эюя", 3), "абв");
        assert_eq!(encrypt_shift("ЭЮЯ", 3), "АБВ");
    }

    #[test]
    fn negative_shift_wraps_backwards() {
        assert_eq!(encrypt_shift("abc", -3), "xyz");
        assert_eq!(encrypt_shift("абв", -3), "эюя");
    }

    #[test]
    fn large_shifts() {
        assert_eq!(encrypt_shift("a", 26), "a");
        assert_eq!(encrypt_shift("а", 32 * 4 + 1), "б");
        let text = "Extreme Шифр";
        assert_eq!(decrypt_shift(&encrypt_shift(text, i32::MIN), i32::MIN), text);
        assert_eq!(decrypt_shift(&encrypt_shift(text, i32::MAX), i32::MAX), text);
    }

    #[test]
    fn passthrough_characters() {
        assert_eq!(encrypt_shift("ё 42 — ?!", 3), "ё 42 — ?!");
        assert_eq!(encrypt_shift("", 3), "");
    }

    #[test]
    fn decrypt_inverts_encrypt() {
        let text = "Съешь же ещё этих мягких французских булок, да выпей чаю. Quick brown fox!";
        assert_eq!(decrypt_shift(&encrypt_shift(text, 7), 7), text);
    }
}
