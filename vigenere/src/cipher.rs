//! Encryption and decryption
//!
//! The keystream is the key repeated cyclically: symbol `i` is shifted by
//! `key[i mod key.len()]`, additively modulo 26.

use crate::alphabet::{NormalizedText, ALPHABET_SIZE};
use crate::key::Key;

const MODULUS: u8 = ALPHABET_SIZE as u8;

/// Encrypts normalized text: `c[i] = (p[i] + key[i mod len]) mod 26`.
pub fn encrypt(plaintext: &NormalizedText, key: &Key) -> NormalizedText {
    let symbols = plaintext
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &p)| (p + key.shift_at(i)) % MODULUS)
        .collect();
    NormalizedText::from_valid(symbols)
}

/// Decrypts normalized text: `p[i] = (c[i] - key[i mod len] + 26) mod 26`.
pub fn decrypt(ciphertext: &NormalizedText, key: &Key) -> NormalizedText {
    let symbols = ciphertext
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &c)| (c + MODULUS - key.shift_at(i)) % MODULUS)
        .collect();
    NormalizedText::from_valid(symbols)
}

/// Encrypts raw text, preserving case and every non-alphabetic character.
///
/// The key only advances on letters, so the alphabetic content of the result
/// is exactly `encrypt(normalize(content), key)`.
pub fn encrypt_text(content: &str, key: &Key) -> String {
    shift_text(content, key, |symbol, shift| (symbol + shift) % MODULUS)
}

/// Decrypts raw text, preserving case and every non-alphabetic character.
pub fn decrypt_text(content: &str, key: &Key) -> String {
    shift_text(content, key, |symbol, shift| {
        (symbol + MODULUS - shift) % MODULUS
    })
}

fn shift_text(content: &str, key: &Key, apply: impl Fn(u8, u8) -> u8) -> String {
    let mut result = String::with_capacity(content.len());
    let mut key_index: usize = 0;

    for c in content.chars() {
        if c.is_ascii_alphabetic() {
            // Determine base character ('A' or 'a') to preserve case
            let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
            let shifted = apply(c as u8 - base, key.shift_at(key_index)) + base;
            result.push(shifted as char);

            // Only advance key index for alphabetic characters
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    result
}
