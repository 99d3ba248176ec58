//! # genomatch
//!
//! Windowed coding-region scanning and sequence matching for one or two
//! genomic samples.
//!
//! ## Overview
//!
//! A sample is any source that can hand out a nucleotide snippet at an offset
//! (see [`sample::SequenceProvider`]). The analyzer never holds more than one
//! window or chunk of a sample at a time, so sequences may be far larger than
//! memory. Three operations are available:
//!
//! - **Candidate regions**: the text between the first `AUG` and the first
//!   `UAG` of every 60-nt window, filtered by a predicate and ranked longest
//!   first
//! - **Region matching**: region pairs drawn in lockstep from two samples,
//!   filtered by a binary predicate and ranked by the first sample's region
//! - **Longest shared sequence**: the longest runs of identical,
//!   position-aligned nucleotides between two samples
//!
//! ## Quick Start
//!
//! ```rust
//! use genomatch_core::SequenceAnalyzer;
//! use genomatch_core::sample::InMemorySample;
//! use genomatch_core::types::SampleSlot;
//!
//! let mut analyzer = SequenceAnalyzer::pair(
//!     InMemorySample::from_dna("ATGCCCTAGGATGAATAG"),
//!     InMemorySample::from_dna("ATGCCGTAGGATGAATAG"),
//! );
//!
//! let candidates = analyzer.find_candidates(0, 18, SampleSlot::First, |r| r.len() >= 2)?;
//! println!("Best candidate: {:?}", candidates.peek_best());
//!
//! let shared = analyzer.longest_shared_sequence(0, 18)?;
//! assert_eq!(shared, vec!["TAGGATGAATAG".replace('T', "U")]);
//! # Ok::<(), genomatch_core::types::GenomatchError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Scanning geometry and output format
//! - [`engine`]: The [`SequenceAnalyzer`] entry point
//! - [`algorithms`]: Candidate, pairing and shared-sequence scans
//! - [`scanner`]: Window splitting and per-window region extraction
//! - [`ranked_list`]: Incrementally sorted result list
//! - [`sample`]: Sequence providers (in memory, indexed FASTA)
//! - [`output`]: TSV and FASTA writers
//! - [`types`]: Regions, pairs and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, GenomatchError>`](types::GenomatchError).
//! Two-sample operations on an analyzer holding one sample fail with
//! [`GenomatchError::MissingSecondSample`](types::GenomatchError::MissingSecondSample)
//! before any sequence is read. A window without a complete codon pair simply
//! contributes no region.

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod ranked_list;
pub mod sample;
pub mod scanner;
pub mod types;

pub use engine::SequenceAnalyzer;
pub use types::GenomatchError;
