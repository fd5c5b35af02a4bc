// helix-diff/src/helix.rs
//
// Capability traits for the storage layer. The core never loads person
// data itself; it consumes these contracts and the tests substitute
// in-memory fakes for them.

use crate::base::{unpack_base, Base, BASES_PER_UNIT};

/// A seekable, chunked source of packed units for one chromosome of one
/// person.
///
/// `read` hands back however many units the implementation buffers at a
/// time; callers must not assume any particular chunk size, and an empty
/// slice means the end of the data. The provided `read_bases` folds any
/// chunking into a single materialized sequence, so scanning code behaves
/// identically no matter how the stream is buffered.
pub trait HelixStream {
    /// Logical length in packed units.
    fn size(&self) -> usize;

    /// Reposition the read cursor to a packed-unit offset.
    fn seek(&mut self, unit_offset: usize);

    /// Read the next chunk of packed units at the cursor, advancing it.
    fn read(&mut self) -> &[u8];

    /// Length in bases.
    #[inline]
    fn base_len(&self) -> usize {
        self.size() * BASES_PER_UNIT
    }

    /// Materialize the full base sequence from unit offset 0.
    ///
    /// Boundary scanning needs both ends of the chromosome addressable,
    /// so the whole sequence is decoded up front rather than walked as a
    /// stream.
    fn read_bases(&mut self) -> Vec<Base> {
        let total_units = self.size();
        let mut bases = Vec::with_capacity(total_units * BASES_PER_UNIT);
        self.seek(0);
        let mut units_seen = 0;
        while units_seen < total_units {
            let chunk = self.read();
            if chunk.is_empty() {
                break;
            }
            let take = chunk.len().min(total_units - units_seen);
            for &unit in &chunk[..take] {
                for offset in 0..BASES_PER_UNIT {
                    bases.push(unpack_base(unit, offset));
                }
            }
            units_seen += take;
        }
        bases
    }
}

/// A person's genome: an ordered collection of chromosomes, each
/// retrievable by index as a fresh stream.
///
/// A valid sample carries exactly [`crate::NUM_CHROMOSOMES`] chromosomes;
/// the comparator enforces that, not this trait.
pub trait Person {
    type Helix: HelixStream;

    /// Number of chromosomes in the sample.
    fn chromosome_count(&self) -> usize;

    /// Stream over the chromosome at `index`. The returned stream is
    /// owned by the caller for the duration of one comparison step.
    fn chromosome(&self, index: usize) -> Self::Helix;
}
