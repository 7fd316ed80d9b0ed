//! # Vigenère Cryptanalysis
//!
//! Recovers the key of a Vigenère cipher from ciphertext alone, using the
//! classical two-step attack:
//!
//! 1. **Key length** - the ciphertext is split into `f` strided columns for
//!    each candidate length `f`; the length whose columns have the highest
//!    average index of coincidence wins, because at the true length every
//!    column is a plain Caesar shift of natural language.
//! 2. **Key characters** - each column is matched against a reference letter
//!    distribution under all 26 rotations; the rotation with the lowest
//!    chi-squared statistic is that position's key letter.
//!
//! ## Usage
//!
//! ```rust
//! use cryptanalysis::{ReferenceDistribution, VigenereCryptanalysis};
//! use vigenere::{encrypt, Key, NormalizedText};
//!
//! let plaintext = NormalizedText::normalize(
//!     "It was a bright cold morning in the harbour town, and the fishermen \
//!      were already hauling their nets onto the stone quay while the gulls \
//!      circled overhead. Nobody in the village could remember a winter as \
//!      long as this one; the snow had arrived before the harvest was finished \
//!      and it still lay in the fields beside the river.",
//! );
//! let key: Key = "LEMON".parse()?;
//! let ciphertext = encrypt(&plaintext, &key).to_string();
//!
//! let analyzer = VigenereCryptanalysis::with_reference(ReferenceDistribution::english());
//! let analysis = analyzer.analyze(&ciphertext, None)?;
//!
//! assert_eq!(analysis.key(), &key);
//! assert_eq!(analysis.plaintext, plaintext);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Diagnostics
//!
//! Every result carries the runner-up key length and the runner-up rotation
//! for each key position, so ambiguous cases can be judged by a human. The
//! same information is logged through `log` according to the configured
//! [`Verbosity`].

pub mod analyzer;
pub mod candidate;
pub mod config;
pub mod error;
pub mod frequencies;
pub mod key_length;
pub mod key_recovery;
pub mod serie;
pub mod statistics;

pub use analyzer::{Analysis, KeyLength, VigenereCryptanalysis};
pub use candidate::{CandidateScore, Ranked};
pub use config::{AnalyzerConfig, Verbosity};
pub use error::{AnalysisError, Result};
pub use frequencies::ReferenceDistribution;
pub use key_length::KeyLengthEstimate;
pub use key_recovery::RecoveredKey;
pub use serie::Serie;
