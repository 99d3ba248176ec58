//! Core scanning and matching algorithms.
//!
//! ## Modules
//!
//! - [`shared_sequence`]: longest runs of identical symbols shared by two samples
//! - [`candidates`]: ranked coding regions of a single sample
//! - [`pairing`]: ranked region pairs drawn in lockstep from two samples
//!
//! ## Windows and chunks
//!
//! Region scans read the sequence in small windows (60 nt by default) and keep
//! at most one region per window:
//!
//! ```text
//! |-- window 0 --|-- window 1 --|-- window 2 --|-- tail --|
//!    AUG....UAG     (none)         AUG.UAG       AUG..UAG
//! ```
//!
//! Shared-sequence scans compare much larger chunks (10,000,000 nt by default)
//! position by position. The running match is never closed at a chunk
//! boundary, only at a mismatch, so chunking never splits a result.

pub mod candidates;
pub mod pairing;
pub mod shared_sequence;

pub use candidates::{find_candidates, probe_correction, rank_regions};
pub use pairing::{match_regions, rank_pairs};
pub use shared_sequence::{SharedSequenceTracker, longest_shared_sequence};
