//! Display strings for epochs and ciphers.

use crate::types::{CipherType, Epoch};

/// Hint shown next to base64 messages.
pub const DIGITAL_DEMO_HINT: &str = "Это простое кодирование Base64 - способ представления текста в виде букв и цифр.\n\
Base64 НЕ является шифрованием - это просто другой способ записи данных.\n\
Попробуйте вставить зашифрованный текст в декодер Base64 онлайн!";

impl Epoch {
    pub fn display_name(self) -> &'static str {
        match self {
            Epoch::Proto => "Протокриптография",
            Epoch::Industrial => "Индустриальная эра",
            Epoch::Home => "Домашняя криптография",
            Epoch::Digital => "Цифровая эра",
        }
    }
}

impl CipherType {
    pub fn display_name(self) -> &'static str {
        match self {
            CipherType::Shift => "Шифр Цезаря",
            CipherType::Substitution => "Подстановочный шифр",
            CipherType::ReversibleEncoding => "Цифровое кодирование (Base64)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CipherType::Shift => {
                "Каждая буква сдвигается на фиксированное число позиций в алфавите. Например, А → Г при сдвиге 3."
            }
            CipherType::Substitution => {
                "Каждая буква заменяется на другую букву по определенному правилу."
            }
            CipherType::ReversibleEncoding => {
                "Современное кодирование текста в формат Base64. Это НЕ шифрование, а способ представления данных."
            }
        }
    }

    /// Extra guidance for solvers, where the cipher has any.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            CipherType::ReversibleEncoding => Some(DIGITAL_DEMO_HINT),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::{encrypt_shift, DEFAULT_SHIFT};

    #[test]
    fn every_entry_has_text() {
        for epoch in Epoch::ALL {
            assert!(!epoch.display_name().is_empty());
        }
        for cipher in CipherType::ALL {
            assert!(!cipher.display_name().is_empty());
            assert!(!cipher.description().is_empty());
        }
    }

    #[test]
    fn shift_description_example_holds() {
        assert_eq!(encrypt_shift("А", DEFAULT_SHIFT), "Г");
    }

    #[test]
    fn only_encoding_has_hint() {
        assert_eq!(CipherType::ReversibleEncoding.hint(), Some(DIGITAL_DEMO_HINT));
        assert_eq!(CipherType::Shift.hint(), None);
        assert_eq!(DIGITAL_DEMO_HINT.lines().count(), 3);
    }
}
