//! Whole-genome comparison: drives trimming, sex classification, and the
//! alignment engine across all 23 chromosome pairs.

use std::fmt;

use rayon::prelude::*;

use crate::align::{self, AlignOpts};
use crate::error::{CompareError, Result};
use crate::helix::{HelixStream, Person};
use crate::sex::{self, SexChromosome};
use crate::telomere;

/// Number of chromosomes in a valid sample.
pub const NUM_CHROMOSOMES: usize = 23;

/// Index of the sex-determining chromosome.
pub const SEX_CHROMOSOME_IDX: usize = 22;

/// A region where the two samples diverge.
///
/// Ranges are half-open `[start, end)` base indices in each person's
/// full-chromosome coordinate space (not trimmed-region-relative), so a
/// consumer can address the stored chromosome with them directly. A pure
/// insertion or deletion carries an empty range on the unchanged side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub chromosome_idx: usize,
    pub person_a: (usize, usize),
    pub person_b: (usize, usize),
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chromosome {} | first sample: [{}, {}) second sample: [{}, {})",
            self.chromosome_idx,
            self.person_a.0,
            self.person_a.1,
            self.person_b.0,
            self.person_b.1
        )
    }
}

/// Whole-genome comparator.
///
/// Stateless apart from its alignment options; a single instance can be
/// reused across any number of comparisons.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    opts: AlignOpts,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opts(opts: AlignOpts) -> Self {
        Comparator { opts }
    }

    /// Compare two people chromosome by chromosome.
    ///
    /// The 23 chromosome pairs share no state, so they are fanned out
    /// across the rayon pool; results are assembled positionally, so the
    /// output is grouped by ascending chromosome index and, within a
    /// chromosome, ascending position, regardless of completion order.
    ///
    /// # Errors
    /// Fails fast, before any comparison work, if either sample does not
    /// carry exactly [`NUM_CHROMOSOMES`] chromosomes.
    pub fn compare<P>(&self, a: &P, b: &P) -> Result<Vec<Difference>>
    where
        P: Person + Sync,
    {
        check_count("first", a)?;
        check_count("second", b)?;

        let per_chromosome: Vec<Vec<Difference>> = (0..NUM_CHROMOSOMES)
            .into_par_iter()
            .map(|idx| self.compare_chromosome(a, b, idx))
            .collect();

        let differences: Vec<Difference> = per_chromosome.into_iter().flatten().collect();
        log::info!(
            "compared {} chromosome pairs, {} difference(s)",
            NUM_CHROMOSOMES,
            differences.len()
        );
        Ok(differences)
    }

    /// Sequential form of [`compare`](Self::compare), for callers that
    /// cannot tolerate a thread pool. Output is identical.
    pub fn compare_serial<P: Person>(&self, a: &P, b: &P) -> Result<Vec<Difference>> {
        check_count("first", a)?;
        check_count("second", b)?;

        Ok((0..NUM_CHROMOSOMES)
            .flat_map(|idx| self.compare_chromosome(a, b, idx))
            .collect())
    }

    fn compare_chromosome<P: Person>(&self, a: &P, b: &P, idx: usize) -> Vec<Difference> {
        let mut helix_a = a.chromosome(idx);
        let mut helix_b = b.chromosome(idx);

        if idx == SEX_CHROMOSOME_IDX {
            let sex_a = sex::classify(helix_a.base_len());
            let sex_b = sex::classify(helix_b.base_len());
            // Comparing across sexes, or against an unclassifiable
            // length, would only produce noise; skip the chromosome.
            if sex_a != sex_b || sex_a == SexChromosome::Indeterminate {
                log::debug!(
                    "chromosome {}: sex classification {:?} vs {:?}, skipping",
                    idx,
                    sex_a,
                    sex_b
                );
                return Vec::new();
            }
        }

        let bases_a = helix_a.read_bases();
        let bases_b = helix_b.read_bases();
        let (a_start, a_end) = telomere::data_range_of(&bases_a);
        let (b_start, b_end) = telomere::data_range_of(&bases_b);
        log::debug!(
            "chromosome {}: data ranges [{}, {}) and [{}, {})",
            idx,
            a_start,
            a_end,
            b_start,
            b_end
        );

        align::align(
            &bases_a[a_start..a_end],
            &bases_b[b_start..b_end],
            a_start,
            b_start,
            &self.opts,
        )
        .into_iter()
        .map(|(range_a, range_b)| Difference {
            chromosome_idx: idx,
            person_a: (range_a.start, range_a.end),
            person_b: (range_b.start, range_b.end),
        })
        .collect()
    }
}

fn check_count<P: Person>(label: &'static str, person: &P) -> Result<()> {
    let count = person.chromosome_count();
    if count != NUM_CHROMOSOMES {
        return Err(CompareError::chromosome_count(label, count, NUM_CHROMOSOMES));
    }
    Ok(())
}
