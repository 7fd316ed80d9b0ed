//! The cryptanalysis pipeline: normalize, estimate key length, recover key, decrypt

use log::info;
use vigenere::{decrypt, Key, NormalizedText};

use crate::config::{AnalyzerConfig, Verbosity};
use crate::error::{AnalysisError, Result};
use crate::frequencies::ReferenceDistribution;
use crate::key_length::{guess_key_length, KeyLengthEstimate};
use crate::key_recovery::{recover_key, RecoveredKey};

/// Where the key length used by an analysis came from.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyLength {
    Provided(usize),
    Guessed(KeyLengthEstimate),
}

impl KeyLength {
    pub fn value(&self) -> usize {
        match self {
            KeyLength::Provided(length) => *length,
            KeyLength::Guessed(estimate) => estimate.length,
        }
    }
}

/// Result of [`VigenereCryptanalysis::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub plaintext: NormalizedText,
    pub key_length: KeyLength,
    pub recovered: RecoveredKey,
}

impl Analysis {
    pub fn key(&self) -> &Key {
        &self.recovered.key
    }

    /// The `(plaintext, key)` pair without diagnostics.
    pub fn into_parts(self) -> (NormalizedText, Key) {
        (self.plaintext, self.recovered.key)
    }
}

/// Ciphertext-only attack on the Vigenère cipher for one plaintext language.
///
/// The reference distribution and configuration are fixed at construction and
/// shared by every call to [`analyze`](Self::analyze); analyses keep no other
/// state, so repeated calls on the same input return the same result.
#[derive(Debug, Clone)]
pub struct VigenereCryptanalysis {
    reference: ReferenceDistribution,
    config: AnalyzerConfig,
}

impl VigenereCryptanalysis {
    /// Builds an analyzer for one language.
    ///
    /// # Arguments
    ///
    /// * `reference` - Letter distribution of the expected plaintext language
    /// * `config` - Key-length bounds and verbosity
    ///
    /// # Returns
    ///
    /// The analyzer, or `InvalidParameter` if `config` does not validate
    pub fn new(reference: ReferenceDistribution, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { reference, config })
    }

    /// Analyzer with the default configuration.
    pub fn with_reference(reference: ReferenceDistribution) -> Self {
        Self {
            reference,
            config: AnalyzerConfig::default(),
        }
    }

    /// Distribution every column is matched against.
    pub fn reference(&self) -> &ReferenceDistribution {
        &self.reference
    }

    /// Configuration fixed at construction.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Recovers key and plaintext from raw ciphertext.
    ///
    /// Non-letters are stripped first. With `known_key_length` absent the
    /// key length is estimated; an explicit length of 0 is rejected.
    pub fn analyze(&self, ciphertext: &str, known_key_length: Option<usize>) -> Result<Analysis> {
        self.analyze_normalized(&NormalizedText::normalize(ciphertext), known_key_length)
    }

    pub fn analyze_normalized(
        &self,
        ciphertext: &NormalizedText,
        known_key_length: Option<usize>,
    ) -> Result<Analysis> {
        let summary = self.config.verbosity >= Verbosity::Summary;

        let key_length = match known_key_length {
            Some(0) => {
                return Err(AnalysisError::InvalidParameter(
                    "explicit key length must be at least 1".to_string(),
                ))
            }
            Some(length) => {
                if summary {
                    info!("Using provided key length: {length}");
                }
                KeyLength::Provided(length)
            }
            None => {
                let estimate = self.guess_key_length(ciphertext)?;
                if summary {
                    info!("Using guessed key length: {}", estimate.length);
                }
                KeyLength::Guessed(estimate)
            }
        };

        let recovered = self.recover_key(ciphertext, key_length.value())?;
        let plaintext = decrypt(ciphertext, &recovered.key);

        Ok(Analysis {
            plaintext,
            key_length,
            recovered,
        })
    }

    /// Estimates the key length from the average index of coincidence.
    ///
    /// Fails with `InsufficientData` below twice the configured maximum key length.
    pub fn guess_key_length(&self, ciphertext: &NormalizedText) -> Result<KeyLengthEstimate> {
        guess_key_length(ciphertext, &self.config)
    }

    /// Recovers a key of `key_length` letters, one chi-squared match per column.
    ///
    /// # Arguments
    ///
    /// * `ciphertext` - Normalized ciphertext
    /// * `key_length` - Number of key letters, at most the ciphertext length
    ///
    /// # Returns
    ///
    /// The key with the best and runner-up rotation of every position
    pub fn recover_key(&self, ciphertext: &NormalizedText, key_length: usize) -> Result<RecoveredKey> {
        recover_key(ciphertext, key_length, &self.reference, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigenere::encrypt;

    const PASSAGE: &str = "It was a bright cold morning in the harbour town, and the fishermen \
        were already hauling their nets onto the stone quay while the gulls circled overhead. \
        Nobody in the village could remember a winter as long as this one; the snow had \
        arrived before the harvest was finished and it still lay in the fields beside the river.";

    fn ciphertext(key: &str) -> String {
        let key: Key = key.parse().unwrap();
        encrypt(&NormalizedText::normalize(PASSAGE), &key).to_string()
    }

    #[test]
    fn test_analyze_guesses_length() {
        let analyzer = VigenereCryptanalysis::with_reference(ReferenceDistribution::english());
        let analysis = analyzer.analyze(&ciphertext("LEMON"), None).unwrap();

        assert_eq!(analysis.key().to_string(), "LEMON");
        assert!(matches!(analysis.key_length, KeyLength::Guessed(ref e) if e.length == 5));
        assert_eq!(analysis.plaintext, NormalizedText::normalize(PASSAGE));
    }

    #[test]
    fn test_analyze_with_provided_length() {
        let analyzer = VigenereCryptanalysis::with_reference(ReferenceDistribution::english());
        let (plaintext, key) = analyzer
            .analyze(&ciphertext("DOG"), Some(3))
            .unwrap()
            .into_parts();

        assert_eq!(key.to_string(), "DOG");
        assert_eq!(plaintext, NormalizedText::normalize(PASSAGE));
    }

    #[test]
    fn test_explicit_zero_length_rejected() {
        let analyzer = VigenereCryptanalysis::with_reference(ReferenceDistribution::english());
        assert!(matches!(
            analyzer.analyze(&ciphertext("DOG"), Some(0)),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig {
            max_key_length: 0,
            ..Default::default()
        };
        assert!(VigenereCryptanalysis::new(ReferenceDistribution::english(), config).is_err());
    }

    #[test]
    fn test_provided_length_beyond_text() {
        let analyzer = VigenereCryptanalysis::with_reference(ReferenceDistribution::english());
        let key_length = usize::MAX / 8;
        assert_eq!(
            analyzer.analyze("ABCDEFGHIJKLMNOPQRSTUVWXYZ", Some(key_length)),
            Err(AnalysisError::InsufficientData {
                needed: key_length,
                available: 26
            })
        );
    }

    #[test]
    fn test_huge_max_key_length_rejected() {
        let config = AnalyzerConfig {
            max_key_length: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            VigenereCryptanalysis::new(ReferenceDistribution::english(), config),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = VigenereCryptanalysis::new(
            ReferenceDistribution::english(),
            AnalyzerConfig::default().with_verbosity(Verbosity::Counts),
        )
        .unwrap();
        let text = ciphertext("KEY");
        assert_eq!(
            analyzer.analyze(&text, None).unwrap(),
            analyzer.analyze(&text, None).unwrap()
        );
    }
}
