// helix-diff/src/defaults.rs

// Alignment engine tuning constants

/// Bases compared per slice-equality check when confirming identical runs.
pub const BLOCK_SIZE: usize = 1024;

/// Extra diagonals on each side of the banded-alignment corridor.
pub const BAND_SLACK: usize = 64;
