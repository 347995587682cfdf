//! End-to-end flows through the public API, epoch to verification.

use cryptowall_cipher::{
    decode_digital, difficulty, encrypt, encrypt_shift, encrypt_tagged, verify, CipherError,
    CipherMetadata, CipherType, EncryptionResult, Epoch,
};
use serde_json::json;

#[test]
fn proto_epoch_message() {
    let plaintext = "привет мир";
    let cipher = Epoch::Proto.cipher_type();
    assert_eq!(cipher, CipherType::Shift);

    let result = encrypt(plaintext, cipher);
    assert_eq!(result.ciphertext, "тулеих плу");
    assert_eq!(result.metadata, CipherMetadata::Shift { shift: 3 });
    assert_eq!(difficulty(plaintext, cipher), 1);

    assert!(verify("Привет Мир", &result.plaintext));
    assert!(!verify("Привет, Мир", &result.plaintext));
}

#[test]
fn industrial_and_home_share_substitution() {
    let plaintext = "Встречаемся у музея в полдень";
    for epoch in [Epoch::Industrial, Epoch::Home] {
        let cipher = epoch.cipher_type();
        let result = encrypt(plaintext, cipher);
        assert_ne!(result.ciphertext, plaintext);
        assert_eq!(result.decrypt(), plaintext);
        assert_eq!(difficulty(plaintext, cipher), 3);
    }
}

#[test]
fn digital_epoch_message() {
    let plaintext = "Hello, мир";
    let result = encrypt(plaintext, Epoch::Digital.cipher_type());
    assert_eq!(decode_digital(&result.ciphertext), plaintext);
    assert_eq!(difficulty(plaintext, CipherType::ReversibleEncoding), 1);
}

#[test]
fn soft_decode_is_not_a_correct_answer() {
    let decoded = decode_digital("not-valid-base64!!");
    assert_eq!(decoded, "");
    assert!(!verify(&decoded, "секрет"));
}

#[test]
fn non_letters_pass_through() {
    assert_eq!(encrypt_shift("Hello, 123!", 3), "Khoor, 123!");
}

#[test]
fn unknown_tag_fails_loudly() {
    let err = encrypt_tagged("text", "playfair").unwrap_err();
    assert_eq!(err, CipherError::UnknownCipherType("playfair".into()));
}

#[test]
fn result_serializes_for_storage() {
    let result = encrypt("abc", CipherType::Shift);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "ciphertext": "def",
            "plaintext": "abc",
            "cipher_type": "caesar",
            "metadata": {"cipher": "caesar", "shift": 3}
        })
    );
    let back: EncryptionResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}

#[test]
fn stored_substitution_key_decrypts_without_seed() {
    let result = encrypt("Тайное послание", CipherType::Substitution);
    let stored = serde_json::to_string(&result.metadata).unwrap();
    let restored: CipherMetadata = serde_json::from_str(&stored).unwrap();
    assert_eq!(
        cryptowall_cipher::decrypt(&result.ciphertext, &restored),
        "Тайное послание"
    );
}
