use std::cmp::Ordering;

use crate::algorithms::candidates::rank_regions;
use crate::ranked_list::RankedList;
use crate::sample::SequenceProvider;
use crate::scanner::RegionScanner;
use crate::types::{GenomatchError, Region, RegionPair};

/// Pair ranking: by the first sample's region, longer encodings first, then
/// lower offsets first
pub fn rank_pairs(a: &RegionPair, b: &RegionPair) -> Ordering {
    rank_regions(&a.first, &b.first)
}

/// Scan two samples window by window in lockstep and rank every pair of
/// regions accepted by `predicate` with [`rank_pairs`].
///
/// A window contributes a pair only when both samples hold a region there.
/// Scanning stops when either sample runs out of sequence.
pub fn match_regions<P, Q, F>(
    first: &mut P,
    second: &mut Q,
    start: u64,
    end: u64,
    window_size: usize,
    mut predicate: F,
) -> Result<RankedList<RegionPair>, GenomatchError>
where
    P: SequenceProvider,
    Q: SequenceProvider,
    F: FnMut(&Region, &Region) -> bool,
{
    let first_windows = RegionScanner::new(first, start, end, window_size);
    let second_windows = RegionScanner::new(second, start, end, window_size);

    let mut matched = RankedList::new();
    for (first_window, second_window) in first_windows.zip(second_windows) {
        let (first_window, second_window) = (first_window?, second_window?);
        debug_assert_eq!(first_window.start, second_window.start);

        if let (Some(first_region), Some(second_region)) =
            (first_window.region, second_window.region)
        {
            if predicate(&first_region, &second_region) {
                matched.insert_by(RegionPair::new(first_region, second_region), rank_pairs);
            }
        }
    }
    Ok(matched)
}
