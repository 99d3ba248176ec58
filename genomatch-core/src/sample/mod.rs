//! Nucleotide sources for the analyzer.
//!
//! The engine only ever asks a sample for a snippet at an offset, through
//! [`SequenceProvider`]. Two providers ship with the crate:
//!
//! - [`InMemorySample`]: the whole sequence held in memory
//! - [`IndexedFastaSample`]: random access into a FASTA record on disk

pub mod io;

pub use io::{FaiRow, IndexedFastaSample, build_fai_rows};

use crate::types::GenomatchError;

/// Source of nucleotide snippets addressed by offset.
///
/// Implementations must be deterministic for a given offset and length and
/// may return fewer symbols than requested only at the end of the sequence.
/// An offset at or past the end yields an empty snippet.
pub trait SequenceProvider {
    fn get_snippet(&mut self, offset: u64, length: usize) -> Result<String, GenomatchError>;
}

/// Rewrite a DNA sequence in the RNA alphabet (`T` becomes `U`), upper-cased
pub fn transcribe(sequence: &mut [u8]) {
    for base in sequence.iter_mut() {
        *base = match base.to_ascii_uppercase() {
            b'T' => b'U',
            upper => upper,
        };
    }
}

/// A sample whose sequence is held entirely in memory.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::sample::{InMemorySample, SequenceProvider};
///
/// let mut sample = InMemorySample::from_dna("ccATGtag");
/// assert_eq!(sample.get_snippet(2, 3)?, "AUG");
/// assert_eq!(sample.get_snippet(6, 10)?, "AG");
/// # Ok::<(), genomatch_core::types::GenomatchError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySample {
    sequence: Vec<u8>,
}

impl InMemorySample {
    /// Wrap a sequence already written in the RNA alphabet
    pub fn new(sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }

    /// Wrap a DNA sequence, transcribing it to the RNA alphabet
    pub fn from_dna(sequence: impl Into<Vec<u8>>) -> Self {
        let mut sequence = sequence.into();
        transcribe(&mut sequence);
        Self { sequence }
    }

    pub fn len(&self) -> u64 {
        self.sequence.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl SequenceProvider for InMemorySample {
    fn get_snippet(&mut self, offset: u64, length: usize) -> Result<String, GenomatchError> {
        let total = self.sequence.len();
        let begin = usize::try_from(offset).map_or(total, |offset| offset.min(total));
        let end = begin.saturating_add(length).min(total);
        String::from_utf8(self.sequence[begin..end].to_vec())
            .map_err(|e| GenomatchError::ParseError(e.to_string()))
    }
}

/// In-memory sequence placed at `base` in a larger coordinate space
#[cfg(test)]
pub(crate) struct OffsetSample {
    pub base: u64,
    pub inner: InMemorySample,
}

#[cfg(test)]
impl SequenceProvider for OffsetSample {
    fn get_snippet(&mut self, offset: u64, length: usize) -> Result<String, GenomatchError> {
        self.inner
            .get_snippet(offset.saturating_sub(self.base), length)
    }
}
