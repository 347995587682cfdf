//! Round-trip and determinism properties across arbitrary input.

use cryptowall_cipher::{
    decode_digital, decrypt_shift, decrypt_substitution, encode_digital, encrypt,
    encrypt_shift, encrypt_substitution, generate_substitution_map, verify, CipherType,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn shift_round_trip(text in any::<String>(), shift in any::<i32>()) {
        prop_assert_eq!(decrypt_shift(&encrypt_shift(&text, shift), shift), text);
    }

    #[test]
    fn shift_round_trip_mixed_script(text in "[а-яА-Яa-zA-Z0-9 ,.!?ёЁ]{0,64}", shift in -100i32..100) {
        prop_assert_eq!(decrypt_shift(&encrypt_shift(&text, shift), shift), text);
    }

    #[test]
    fn substitution_round_trip(text in any::<String>(), seed in any::<String>()) {
        let map = generate_substitution_map(&seed);
        prop_assert_eq!(decrypt_substitution(&encrypt_substitution(&text, &map), &map), text);
    }

    #[test]
    fn substitution_generation_is_deterministic(seed in any::<String>()) {
        prop_assert_eq!(generate_substitution_map(&seed), generate_substitution_map(&seed));
    }

    #[test]
    fn digital_round_trip(text in any::<String>()) {
        prop_assert_eq!(decode_digital(&encode_digital(&text)), text);
    }

    #[test]
    fn every_cipher_decrypts_its_own_output(text in "\\PC{0,80}") {
        for cipher in CipherType::ALL {
            let result = encrypt(&text, cipher);
            prop_assert_eq!(result.decrypt(), text.clone());
            prop_assert!(verify(&result.decrypt(), &text));
        }
    }

    #[test]
    fn letters_keep_their_case(text in "[а-яА-Я]{1,32}") {
        let ciphertext = encrypt_shift(&text, 3);
        for (plain, cipher) in text.chars().zip(ciphertext.chars()) {
            prop_assert_eq!(plain.is_uppercase(), cipher.is_uppercase());
        }
    }
}
