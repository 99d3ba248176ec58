use crate::sample::SequenceProvider;
use crate::types::GenomatchError;

/// Running state of a longest-shared-sequence scan.
///
/// Holds the match currently being extended and every match of the best
/// length seen so far, in scan order. The current match survives chunk
/// boundaries and is only closed by a mismatch or by [`finish`](Self::finish).
#[derive(Debug, Default, Clone)]
pub struct SharedSequenceTracker {
    current: String,
    best: Vec<String>,
}

impl SharedSequenceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare two position-aligned chunks symbol by symbol.
    ///
    /// When one chunk is shorter the other sequence has ended, so the current
    /// match is closed after the shorter chunk.
    pub fn compare_chunk(&mut self, first: &str, second: &str) {
        for (a, b) in first.chars().zip(second.chars()) {
            if a == b {
                self.current.push(a);
            } else {
                self.close_current();
            }
        }
        if first.len() != second.len() {
            self.close_current();
        }
    }

    fn close_current(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let candidate = std::mem::take(&mut self.current);
        match self.best.first().map(String::len) {
            Some(best) if candidate.len() < best => {}
            Some(best) if candidate.len() == best => self.best.push(candidate),
            _ => self.best = vec![candidate],
        }
    }

    /// Length of the best matches closed so far
    pub fn best_length(&self) -> usize {
        self.best.first().map_or(0, String::len)
    }

    /// Close the current match and return every longest match
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        self.close_current();
        self.best
    }
}

/// Longest runs of identical, position-aligned symbols shared by two samples
/// over `[start, end)`.
///
/// The range is read in chunks of `chunk_size` followed by one remainder
/// chunk, so at most one chunk per sample is in memory. Ties are returned in
/// scan order; an empty list means the samples share no symbol in the range.
pub fn longest_shared_sequence<P, Q>(
    first: &mut P,
    second: &mut Q,
    start: u64,
    end: u64,
    chunk_size: usize,
) -> Result<Vec<String>, GenomatchError>
where
    P: SequenceProvider,
    Q: SequenceProvider,
{
    let chunk = chunk_size.max(1);
    let mut tracker = SharedSequenceTracker::new();

    let mut index = start;
    while end - index > chunk as u64 {
        compare_at(first, second, &mut tracker, index, chunk)?;
        index += chunk as u64;
    }
    let remainder = usize::try_from(end.saturating_sub(index)).unwrap_or(usize::MAX);
    compare_at(first, second, &mut tracker, index, remainder)?;

    Ok(tracker.finish())
}

fn compare_at<P, Q>(
    first: &mut P,
    second: &mut Q,
    tracker: &mut SharedSequenceTracker,
    offset: u64,
    length: usize,
) -> Result<(), GenomatchError>
where
    P: SequenceProvider,
    Q: SequenceProvider,
{
    let first_chunk = first.get_snippet(offset, length)?;
    let second_chunk = second.get_snippet(offset, length)?;
    tracker.compare_chunk(&first_chunk, &second_chunk);
    log::debug!(
        "Compared {} nt at {}, best shared length so far {}",
        first_chunk.len().min(second_chunk.len()),
        offset,
        tracker.best_length()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{InMemorySample, OffsetSample};

    fn shared(first: &str, second: &str, chunk_size: usize) -> Vec<String> {
        let mut a = InMemorySample::new(first);
        let mut b = InMemorySample::new(second);
        let end = first.len().max(second.len()) as u64;
        longest_shared_sequence(&mut a, &mut b, 0, end, chunk_size).unwrap()
    }

    #[test]
    fn test_tracker_keeps_ties_in_scan_order() {
        let mut tracker = SharedSequenceTracker::new();
        tracker.compare_chunk("AACGGAU", "AAUGGCU");
        assert_eq!(tracker.best_length(), 2);
        assert_eq!(tracker.finish(), vec!["AA", "GG"]);
    }

    #[test]
    fn test_tracker_longer_match_replaces_best() {
        let mut tracker = SharedSequenceTracker::new();
        tracker.compare_chunk("AUCCCG", "AGCCCG");
        assert_eq!(tracker.finish(), vec!["CCCG"]);
    }

    #[test]
    fn test_tracker_carries_match_across_chunks() {
        let mut tracker = SharedSequenceTracker::new();
        tracker.compare_chunk("CCAU", "GGAU");
        tracker.compare_chunk("GCAU", "GCAU");
        tracker.compare_chunk("CCGG", "CCAA");
        assert_eq!(tracker.finish(), vec!["AUGCAUCC"]);
    }

    #[test]
    fn test_tracker_closes_match_when_one_side_ends() {
        let mut tracker = SharedSequenceTracker::new();
        tracker.compare_chunk("AUGCC", "AUG");
        tracker.compare_chunk("CC", "CC");
        assert_eq!(tracker.finish(), vec!["AUG"]);
    }

    #[test]
    fn test_identical_sequences_share_everything() {
        assert_eq!(shared("AUGCAUGC", "AUGCAUGC", 10_000_000), vec!["AUGCAUGC"]);
    }

    #[test]
    fn test_nothing_shared() {
        assert!(shared("AAAA", "UUUU", 10_000_000).is_empty());
    }

    #[test]
    fn test_match_across_chunk_boundaries() {
        let first = "GGAUGCAUCCGG";
        let second = "CCAUGCAUCCAA";
        assert_eq!(shared(first, second, 4), vec!["AUGCAUCC"]);
        assert_eq!(shared(first, second, 3), vec!["AUGCAUCC"]);
        assert_eq!(shared(first, second, 1), vec!["AUGCAUCC"]);
    }

    #[test]
    fn test_chunking_does_not_change_result() {
        let first = "AUGGCCUAGCAUUAGGCAUCG";
        let second = "AUGCCCUAGGAUUAGGGAUCC";
        let expected = shared(first, second, 10_000_000);
        for chunk_size in 1..=first.len() {
            assert_eq!(shared(first, second, chunk_size), expected);
        }
    }

    #[test]
    fn test_symmetric_in_samples() {
        let first = "AUGGCCUAGCAUUAGGCAUCG";
        let second = "AUGCCCUAGGAUUAGGGAUCC";
        assert_eq!(shared(first, second, 5), shared(second, first, 5));
    }

    #[test]
    fn test_sub_range() {
        let mut a = InMemorySample::new("CCAUGCGG");
        let mut b = InMemorySample::new("CCAUGCGG");
        let result = longest_shared_sequence(&mut a, &mut b, 2, 6, 10_000_000).unwrap();
        assert_eq!(result, vec!["AUGC"]);
    }

    #[test]
    fn test_empty_range() {
        let mut a = InMemorySample::new("AUGC");
        let mut b = InMemorySample::new("AUGC");
        let result = longest_shared_sequence(&mut a, &mut b, 2, 2, 10_000_000).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_range_ending_at_address_limit() {
        let base = u64::MAX - 5;
        let sample = |sequence: &str| OffsetSample {
            base,
            inner: InMemorySample::new(sequence),
        };

        for chunk_size in [2, 10_000_000] {
            let (mut a, mut b) = (sample("AUGCC"), sample("AUGCC"));
            let result = longest_shared_sequence(&mut a, &mut b, base, u64::MAX, chunk_size);
            assert_eq!(result.unwrap(), vec!["AUGCC"]);
        }
    }
}
