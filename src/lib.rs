//! Compare the packed chromosome data of two people and report the
//! regions where they diverge, after trimming the telomeric caps and
//! skipping mismatched sex chromosomes.

pub mod align;
pub mod base;
pub mod comparator;
pub mod defaults;
pub mod error;
pub mod helix; // Capability traits implemented by the surrounding storage layer
pub mod sex;
pub mod telomere;

pub use align::AlignOpts;
pub use base::{Base, BASES_PER_UNIT};
pub use comparator::{Comparator, Difference, NUM_CHROMOSOMES, SEX_CHROMOSOME_IDX};
pub use error::{CompareError, Result};
pub use helix::{HelixStream, Person};
pub use sex::SexChromosome;
