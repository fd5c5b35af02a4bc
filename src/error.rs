//! Error types for the comparison API.
//!
//! The core has exactly one hard failure mode: a sample that does not
//! carry the expected number of chromosomes. Everything else the input
//! can throw at it (ambiguous sex lengths, chromosomes shorter than the
//! telomere repeat) is handled as a policy, not an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    /// A sample's chromosome count does not match a valid genome.
    #[error("chromosome data does not match expected size: {label} sample has {count} chromosomes, expected {expected}")]
    ChromosomeCount {
        label: &'static str,
        count: usize,
        expected: usize,
    },
}

impl CompareError {
    pub fn chromosome_count(label: &'static str, count: usize, expected: usize) -> Self {
        Self::ChromosomeCount {
            label,
            count,
            expected,
        }
    }
}

/// Result alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;
