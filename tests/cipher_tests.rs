// tests/cipher_tests.rs
mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sensor_kit::cipher::{self, decrypt, encrypt, ShiftKey};
use sensor_kit::{CipherDirection, CoreError};

fn random_upper(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

#[test]
fn test_encrypt_basic() {
    common::setup();
    assert_eq!(encrypt("HELLO", 3).unwrap(), "KHOOR");
}

#[test]
fn test_decrypt_basic() {
    assert_eq!(decrypt("KHOOR", 3).unwrap(), "HELLO");
}

#[test]
fn test_wrap_around_both_directions() {
    assert_eq!(encrypt("XYZ", 3).unwrap(), "ABC");
    assert_eq!(decrypt("ABC", 3).unwrap(), "XYZ");
}

#[test]
fn test_key_26_is_identity() {
    assert_eq!(encrypt("ABC", 26).unwrap(), "ABC");
    assert_eq!(decrypt("ABC", 26).unwrap(), "ABC");
    assert_eq!(encrypt("THEQUICKBROWNFOX", 26).unwrap(), "THEQUICKBROWNFOX");
}

#[test]
fn test_empty_input_succeeds() {
    for key in 1..=26 {
        assert_eq!(encrypt("", key).unwrap(), "");
        assert_eq!(decrypt("", key).unwrap(), "");
    }
}

#[test]
fn test_out_of_range_keys_rejected() {
    for key in [0, 27, -1, i32::MIN, i32::MAX] {
        assert!(matches!(encrypt("HELLO", key), Err(CoreError::InvalidKey(k)) if k == key));
        assert!(matches!(decrypt("HELLO", key), Err(CoreError::InvalidKey(k)) if k == key));
    }
    // key is checked even when there is nothing to rotate
    assert!(matches!(encrypt("", 0), Err(CoreError::InvalidKey(0))));
}

#[test]
fn test_lowercase_rejected() {
    assert!(matches!(
        encrypt("hello", 3),
        Err(CoreError::InvalidCharacter { ch: 'h', position: 0 })
    ));
    assert!(matches!(
        decrypt("khoor", 3),
        Err(CoreError::InvalidCharacter { ch: 'k', position: 0 })
    ));
}

#[test]
fn test_single_bad_character_rejects_whole_input() {
    for input in ["HELLO WORLD", "ABC1", "A-B", "ÀBC", "HELLo"] {
        let err = encrypt(input, 5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCharacter { .. }), "{input}: {err}");
        assert!(decrypt(input, 5).is_err());
    }

    assert!(matches!(
        encrypt("HELLO WORLD", 1),
        Err(CoreError::InvalidCharacter { ch: ' ', position: 5 })
    ));
}

#[test]
fn test_roundtrip_all_keys_random_strings() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for key in 1..=26 {
        for len in [1, 7, 64] {
            let plain = random_upper(&mut rng, len);
            let cipher_text = encrypt(&plain, key).unwrap();
            assert_eq!(cipher_text.len(), plain.len());
            assert_eq!(decrypt(&cipher_text, key).unwrap(), plain, "key {key}");
        }
    }
}

#[test]
fn test_full_alphabet_shift() {
    assert_eq!(
        encrypt("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 13).unwrap(),
        "NOPQRSTUVWXYZABCDEFGHIJKLM"
    );
}

#[test]
fn test_shift_key_validation_and_inverse() {
    assert!(ShiftKey::new(0).is_err());
    assert!(ShiftKey::try_from(27).is_err());

    let key = ShiftKey::new(3).unwrap();
    assert_eq!(key.get(), 3);
    assert_eq!(key.inverse().get(), 23);
    assert_eq!(i32::from(key), 3);

    let full = ShiftKey::new(26).unwrap();
    assert_eq!(full.inverse(), full);

    // encrypting with the inverse key decrypts
    let inverse = i32::from(key.inverse());
    assert_eq!(encrypt("KHOOR", inverse).unwrap(), "HELLO");
}

#[test]
fn test_apply_dispatches_on_direction() {
    assert_eq!(
        cipher::apply(CipherDirection::Encrypt, "HELLO", 3).unwrap(),
        "KHOOR"
    );
    assert_eq!(
        cipher::apply(CipherDirection::Decrypt, "KHOOR", 3).unwrap(),
        "HELLO"
    );
}
