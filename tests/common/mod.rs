// Shared fakes for the integration tests: in-memory stand-ins for the
// storage-layer capability contracts the core consumes.

use helix_diff::base::pack;
use helix_diff::{Base, HelixStream, Person, BASES_PER_UNIT};

/// In-memory chromosome stream with a configurable read-chunk size, so
/// tests can prove the scanners are chunking-independent.
pub struct FakeHelixStream {
    data: Vec<u8>,
    chunk: usize,
    cursor: usize,
}

impl FakeHelixStream {
    pub fn new(data: Vec<u8>, chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be positive");
        FakeHelixStream {
            data,
            chunk,
            cursor: 0,
        }
    }
}

impl HelixStream for FakeHelixStream {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn seek(&mut self, unit_offset: usize) {
        self.cursor = unit_offset.min(self.data.len());
    }

    fn read(&mut self) -> &[u8] {
        let start = self.cursor;
        let end = (start + self.chunk).min(self.data.len());
        self.cursor = end;
        &self.data[start..end]
    }
}

/// Stream that only reports a size and never yields data; enough for
/// length-based classification.
pub struct SizedHelix(pub usize);

impl HelixStream for SizedHelix {
    fn size(&self) -> usize {
        self.0
    }

    fn seek(&mut self, _unit_offset: usize) {}

    fn read(&mut self) -> &[u8] {
        &[]
    }
}

/// Person backed by per-chromosome packed data, served in `chunk`-unit
/// reads.
pub struct FakePerson {
    chromosomes: Vec<Vec<u8>>,
    chunk: usize,
}

impl FakePerson {
    pub fn new(chromosomes: Vec<Vec<u8>>, chunk: usize) -> Self {
        FakePerson { chromosomes, chunk }
    }
}

impl Person for FakePerson {
    type Helix = FakeHelixStream;

    fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    fn chromosome(&self, index: usize) -> FakeHelixStream {
        FakeHelixStream::new(self.chromosomes[index].clone(), self.chunk)
    }
}

/// Pack an ASCII base string into storage units. The string must fill
/// whole units; tests pick lengths that are multiples of four.
pub fn pack_str(seq: &str) -> Vec<u8> {
    assert_eq!(
        seq.len() % BASES_PER_UNIT,
        0,
        "sequence must fill whole packed units"
    );
    seq.as_bytes()
        .chunks(BASES_PER_UNIT)
        .map(|chunk| {
            let mut unit = [Base::A; BASES_PER_UNIT];
            for (i, &ch) in chunk.iter().enumerate() {
                unit[i] = Base::from_ascii(ch).expect("test sequences are ACGT");
            }
            pack(unit)
        })
        .collect()
}
