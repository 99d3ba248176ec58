use std::fmt;

use thiserror::Error;

/// A coding region found between a start codon and a stop codon.
///
/// The offset is the zero-based position of the first nucleotide of
/// `encoding` within the logical sequence it was read from. Regions are built
/// once with their final offset; see
/// [`LocalRegion::into_region`](crate::scanner::LocalRegion::into_region).
///
/// # Examples
///
/// ```rust
/// use genomatch_core::types::Region;
///
/// let region = Region::new("CCGA".to_string(), 120);
/// assert_eq!(region.len(), 4);
/// assert_eq!(region.offset(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    encoding: String,
    offset: u64,
}

impl Region {
    #[must_use]
    pub const fn new(encoding: String, offset: u64) -> Self {
        Self { encoding, offset }
    }

    /// Nucleotides between the start and stop codons
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Zero-based position of the region within the logical sequence
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Length of the encoding in nucleotides
    pub fn len(&self) -> usize {
        self.encoding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoding.is_empty()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.encoding, self.offset)
    }
}

/// Regions drawn from the same window position of two samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPair {
    /// Region from the first sample
    pub first: Region,
    /// Region from the second sample
    pub second: Region,
}

impl RegionPair {
    #[must_use]
    pub const fn new(first: Region, second: Region) -> Self {
        Self { first, second }
    }
}

/// Selects one of the samples held by an analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleSlot {
    #[default]
    First,
    Second,
}

impl fmt::Display for SampleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

impl std::str::FromStr for SampleSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "1" => Ok(Self::First),
            "second" | "2" => Ok(Self::Second),
            other => Err(format!("Invalid sample: {}", other)),
        }
    }
}

/// Error types that can occur while scanning or matching samples
#[derive(Error, Debug)]
pub enum GenomatchError {
    /// A two-sample operation was invoked on an analyzer holding one sample
    #[error("Operation requires two samples but only one was configured")]
    MissingSecondSample,
    /// The requested range ends before it starts
    #[error("Invalid range: start {start} is past end {end}")]
    InvalidRange { start: u64, end: u64 },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Requested FASTA record does not exist
    #[error("Unknown record: {0}")]
    UnknownRecord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_accessors() {
        let region = Region::new("GGCA".to_string(), 42);
        assert_eq!(region.encoding(), "GGCA");
        assert_eq!(region.offset(), 42);
        assert_eq!(region.len(), 4);
        assert!(!region.is_empty());
        assert_eq!(region.to_string(), "GGCA@42");
    }

    #[test]
    fn test_empty_region() {
        let region = Region::new(String::new(), 3);
        assert!(region.is_empty());
        assert_eq!(region.len(), 0);
    }

    #[test]
    fn test_sample_slot_parsing() {
        assert_eq!("first".parse::<SampleSlot>(), Ok(SampleSlot::First));
        assert_eq!("2".parse::<SampleSlot>(), Ok(SampleSlot::Second));
        assert!("third".parse::<SampleSlot>().is_err());
        assert_eq!(SampleSlot::Second.to_string(), "second");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenomatchError::MissingSecondSample.to_string(),
            "Operation requires two samples but only one was configured"
        );
        assert_eq!(
            GenomatchError::InvalidRange { start: 10, end: 4 }.to_string(),
            "Invalid range: start 10 is past end 4"
        );
    }
}
