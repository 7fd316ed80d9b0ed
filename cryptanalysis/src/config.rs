//! Analyzer configuration

use log::LevelFilter;

use crate::error::{AnalysisError, Result};

/// How much diagnostic output the analyzer emits through `log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No diagnostics
    #[default]
    Quiet,
    /// Chosen key length and key, each with its runner-up
    Summary,
    /// Every candidate key length and every rotation score
    Candidates,
    /// Per-column letter counts as well
    Counts,
}

impl Verbosity {
    /// Maps a numeric level (as in `VERBOSE=2`) to a verbosity, saturating at `Counts`.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Summary,
            2 => Verbosity::Candidates,
            _ => Verbosity::Counts,
        }
    }

    /// The `log` filter under which every message of this verbosity is visible.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Warn,
            Verbosity::Summary => LevelFilter::Info,
            Verbosity::Candidates => LevelFilter::Debug,
            Verbosity::Counts => LevelFilter::Trace,
        }
    }
}

/// Tuning knobs for [`VigenereCryptanalysis`](crate::VigenereCryptanalysis).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Largest key length tried when guessing.
    pub max_key_length: usize,
    /// Symbols of ciphertext required per candidate key length; only lengths
    /// up to `len / min_column_length` are tried.
    pub min_column_length: usize,
    /// When set, prefer the shortest key length whose average IC is within
    /// this fraction of the best one.
    pub shorter_key_tolerance: Option<f64>,
    pub verbosity: Verbosity,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_key_length: 10,
            min_column_length: 20,
            shorter_key_tolerance: None,
            verbosity: Verbosity::Quiet,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 {
            return Err(AnalysisError::InvalidParameter(
                "max_key_length must be at least 1".to_string(),
            ));
        }
        if self.max_key_length.checked_mul(2).is_none() {
            return Err(AnalysisError::InvalidParameter(format!(
                "max_key_length is too large, got {}",
                self.max_key_length
            )));
        }
        if self.min_column_length == 0 {
            return Err(AnalysisError::InvalidParameter(
                "min_column_length must be at least 1".to_string(),
            ));
        }
        if let Some(tolerance) = self.shorter_key_tolerance {
            if !(0.0..1.0).contains(&tolerance) {
                return Err(AnalysisError::InvalidParameter(format!(
                    "shorter_key_tolerance must be in [0, 1), got {tolerance}"
                )));
            }
        }
        Ok(())
    }

    /// Shortest normalized ciphertext the key-length estimator accepts.
    ///
    /// Saturates for configurations that [`validate`](Self::validate) rejects.
    pub fn min_text_length(&self) -> usize {
        self.max_key_length.saturating_mul(2)
    }
}
