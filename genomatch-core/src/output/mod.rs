//! Output formatting for scan results.
//!
//! ## Supported Formats
//!
//! - **TSV**: one tab-separated line per result
//! - **FASTA**: one record per region or shared sequence
//!
//! ## Examples
//!
//! ```rust
//! use genomatch_core::SequenceAnalyzer;
//! use genomatch_core::config::OutputFormat;
//! use genomatch_core::output::write_regions;
//! use genomatch_core::sample::InMemorySample;
//! use genomatch_core::types::SampleSlot;
//!
//! let mut analyzer = SequenceAnalyzer::single(InMemorySample::new("AUGCCUAGGG"));
//! let candidates = analyzer.find_candidates(0, 10, SampleSlot::First, |_| true)?;
//!
//! let mut buffer = Vec::new();
//! write_regions(&mut buffer, &candidates, OutputFormat::Tsv)?;
//! assert_eq!(String::from_utf8(buffer).unwrap(), "3\t2\tCC\n");
//! # Ok::<(), genomatch_core::types::GenomatchError>(())
//! ```

use crate::config::OutputFormat;
use crate::ranked_list::RankedList;
use crate::types::{GenomatchError, Region, RegionPair};
use std::io::Write;

mod formats {
    pub mod fasta;
    pub mod tsv;
}

use formats::{fasta, tsv};

/// Writes ranked regions, best first.
///
/// # Errors
///
/// Returns [`GenomatchError::IoError`] if writing fails.
pub fn write_regions<W: Write>(
    writer: &mut W,
    regions: &RankedList<Region>,
    format: OutputFormat,
) -> Result<(), GenomatchError> {
    match format {
        OutputFormat::Tsv => tsv::write_regions(writer, regions),
        OutputFormat::Fasta => fasta::write_regions(writer, regions),
    }
}

/// Writes ranked region pairs, best first.
///
/// # Errors
///
/// Returns [`GenomatchError::IoError`] if writing fails.
pub fn write_pairs<W: Write>(
    writer: &mut W,
    pairs: &RankedList<RegionPair>,
    format: OutputFormat,
) -> Result<(), GenomatchError> {
    match format {
        OutputFormat::Tsv => tsv::write_pairs(writer, pairs),
        OutputFormat::Fasta => fasta::write_pairs(writer, pairs),
    }
}

/// Writes the longest shared sequences in scan order.
///
/// # Errors
///
/// Returns [`GenomatchError::IoError`] if writing fails.
pub fn write_shared_sequences<W: Write>(
    writer: &mut W,
    shared: &[String],
    format: OutputFormat,
) -> Result<(), GenomatchError> {
    match format {
        OutputFormat::Tsv => tsv::write_shared_sequences(writer, shared),
        OutputFormat::Fasta => fasta::write_shared_sequences(writer, shared),
    }
}
