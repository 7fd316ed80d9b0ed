//! Round-trip properties of the cipher.

use proptest::prelude::*;
use vigenere::{decrypt, decrypt_text, encrypt, encrypt_text, Key, NormalizedText};

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(text in "[A-Za-z ,.]{1,200}", key in "[A-Z]{1,12}") {
        let key: Key = key.parse().unwrap();
        let plaintext = NormalizedText::normalize(&text);
        prop_assert_eq!(decrypt(&encrypt(&plaintext, &key), &key), plaintext);
    }

    #[test]
    fn text_variant_round_trips_verbatim(text in "\\PC{0,200}", key in "[a-z]{1,12}") {
        let key: Key = key.parse().unwrap();
        prop_assert_eq!(decrypt_text(&encrypt_text(&text, &key), &key), text);
    }
}

#[test]
fn kerckhoffs_sample_round_trip() {
    let key: Key = "MYKEY".parse().unwrap();
    let original = "Kerckhoffs's principle - A cryptosystem should be secure even if \
                    everything about the system, except the key, is public knowledge.";

    let encrypted = encrypt(&NormalizedText::normalize(original), &key);
    assert_ne!(encrypted, NormalizedText::normalize(original));
    assert_eq!(
        decrypt(&encrypted, &key),
        NormalizedText::normalize(original)
    );
}
