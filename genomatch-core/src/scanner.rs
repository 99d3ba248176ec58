//! Windowed coding-region extraction.
//!
//! A logical sequence is read as consecutive windows of a fixed size, the
//! last one possibly shorter. Each window contributes at most one region: the
//! nucleotides between its first start codon and its first stop codon.

use crate::constants::{CODON_LENGTH, START_CODON, STOP_CODON};
use crate::sample::SequenceProvider;
use crate::types::{GenomatchError, Region};

/// A region located inside one window, with a window-relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRegion<'w> {
    pub encoding: &'w str,
    pub offset: usize,
}

impl LocalRegion<'_> {
    /// Build the final [`Region`] for a window that starts at `window_start`
    /// in the logical sequence.
    #[must_use]
    pub fn into_region(self, window_start: u64) -> Region {
        Region::new(self.encoding.to_string(), window_start + self.offset as u64)
    }
}

/// Find the region enclosed by the first start codon and the first stop codon
/// of `window`.
///
/// The stop codon is searched across the whole window, not only after the
/// start codon. A window missing either codon, or whose first stop codon comes
/// before the first start codon, holds no region.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::scanner::locate_region;
///
/// let region = locate_region("CCAUGGGAUAGCC").unwrap();
/// assert_eq!(region.encoding, "GGA");
/// assert_eq!(region.offset, 5);
///
/// assert!(locate_region("UAGCCAUGCC").is_none());
/// ```
pub fn locate_region(window: &str) -> Option<LocalRegion<'_>> {
    let begin = window.find(START_CODON)? + CODON_LENGTH;
    let end = window.find(STOP_CODON)?;
    (begin <= end).then(|| LocalRegion {
        encoding: &window[begin..end],
        offset: begin,
    })
}

/// Span of one window in the logical sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub length: usize,
}

/// Splits `[start, end)` into consecutive windows of `window_size`, the last
/// one sized to the remainder.
#[derive(Debug, Clone)]
pub struct WindowCursor {
    next: u64,
    end: u64,
    window_size: usize,
}

impl WindowCursor {
    #[must_use]
    pub fn new(start: u64, end: u64, window_size: usize) -> Self {
        Self {
            next: start,
            end,
            window_size: window_size.max(1),
        }
    }
}

impl Iterator for WindowCursor {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.next >= self.end {
            return None;
        }
        let remaining = self.end - self.next;
        let length = usize::try_from(remaining).map_or(self.window_size, |remaining| {
            remaining.min(self.window_size)
        });
        let window = Window {
            start: self.next,
            length,
        };
        self.next += length as u64;
        Some(window)
    }
}

/// Outcome of scanning one window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedWindow {
    /// Global index of the window's first nucleotide
    pub start: u64,
    /// Region found in the window, already carrying its global offset
    pub region: Option<Region>,
}

/// Lazily scans the windows of `[start, end)` of one sample.
///
/// Each item covers one window. Iteration ends at `end` or as soon as the
/// sample returns an empty window, and stops after the first provider error.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::sample::InMemorySample;
/// use genomatch_core::scanner::RegionScanner;
///
/// let mut sample = InMemorySample::new("AUGCCUAGAUGGGGUAG");
/// let regions: Vec<_> = RegionScanner::new(&mut sample, 0, 17, 8)
///     .filter_map(|window| window.unwrap().region)
///     .collect();
///
/// assert_eq!(regions[0].encoding(), "CC");
/// assert_eq!(regions[0].offset(), 3);
/// ```
pub struct RegionScanner<'p, P: SequenceProvider> {
    provider: &'p mut P,
    cursor: WindowCursor,
    exhausted: bool,
}

impl<'p, P: SequenceProvider> RegionScanner<'p, P> {
    pub fn new(provider: &'p mut P, start: u64, end: u64, window_size: usize) -> Self {
        Self {
            provider,
            cursor: WindowCursor::new(start, end, window_size),
            exhausted: false,
        }
    }
}

impl<P: SequenceProvider> Iterator for RegionScanner<'_, P> {
    type Item = Result<ScannedWindow, GenomatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let Some(window) = self.cursor.next() else {
            self.exhausted = true;
            return None;
        };

        let text = match self.provider.get_snippet(window.start, window.length) {
            Ok(text) => text,
            Err(e) => {
                self.exhausted = true;
                return Some(Err(e));
            }
        };
        if text.is_empty() {
            self.exhausted = true;
            return None;
        }

        let region = locate_region(&text).map(|local| local.into_region(window.start));
        Some(Ok(ScannedWindow {
            start: window.start,
            region,
        }))
    }
}
