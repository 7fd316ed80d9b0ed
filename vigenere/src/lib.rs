//! # Vigenère Cipher
//!
//! Additive polyalphabetic substitution over the 26-letter Latin alphabet.
//!
//! The cipher works on [`NormalizedText`]: input is stripped to its ASCII
//! letters and case-folded before any arithmetic happens. Format-preserving
//! variants ([`encrypt_text`], [`decrypt_text`]) are available for display.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere::{decrypt, encrypt, Key, NormalizedText};
//!
//! let key: Key = "KEY".parse()?;
//! let plaintext = NormalizedText::normalize("Hello!");
//!
//! let ciphertext = encrypt(&plaintext, &key);
//! assert_eq!(ciphertext.to_string(), "RIJVS");
//! assert_eq!(decrypt(&ciphertext, &key), plaintext);
//! # Ok::<(), vigenere::CipherError>(())
//! ```

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod key;

pub use alphabet::{letter, NormalizedText, ALPHABET_SIZE};
pub use cipher::{decrypt, decrypt_text, encrypt, encrypt_text};
pub use error::{CipherError, Result};
pub use key::Key;
