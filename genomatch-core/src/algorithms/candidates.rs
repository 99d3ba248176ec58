use std::cmp::Ordering;

use crate::config::AnalyzerConfig;
use crate::constants::{CODON_LENGTH, START_CODON, STOP_CODON};
use crate::ranked_list::RankedList;
use crate::sample::SequenceProvider;
use crate::scanner::RegionScanner;
use crate::types::{GenomatchError, Region};

/// Candidate ranking: longer encodings first, then lower offsets first
pub fn rank_regions(a: &Region, b: &Region) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| a.offset().cmp(&b.offset()))
}

/// Distance from the probe start to the first window of a candidate scan.
///
/// When the probe holds both codons and its first stop codon comes before its
/// first start codon, scanning resumes right after that stop codon; otherwise
/// it begins at the probe start.
pub fn probe_correction(probe: &str) -> u64 {
    match (probe.find(START_CODON), probe.find(STOP_CODON)) {
        (Some(start), Some(stop)) if start > stop => (stop + CODON_LENGTH) as u64,
        _ => 0,
    }
}

/// Scan one sample over `[start, end)` and rank every region accepted by
/// `predicate` with [`rank_regions`].
pub fn find_candidates<P, F>(
    provider: &mut P,
    start: u64,
    end: u64,
    config: &AnalyzerConfig,
    mut predicate: F,
) -> Result<RankedList<Region>, GenomatchError>
where
    P: SequenceProvider,
    F: FnMut(&Region) -> bool,
{
    let probe = provider.get_snippet(start, config.probe_length)?;
    let first_window = start.saturating_add(probe_correction(&probe));
    if first_window != start {
        log::debug!(
            "Probe at {} opens on a stop codon, first window moved to {}",
            start,
            first_window
        );
    }

    let mut candidates = RankedList::new();
    for scanned in RegionScanner::new(provider, first_window, end, config.window_size) {
        if let Some(region) = scanned?.region.filter(|region| predicate(region)) {
            candidates.insert_by(region, rank_regions);
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{InMemorySample, OffsetSample};

    fn config(window_size: usize) -> AnalyzerConfig {
        AnalyzerConfig {
            window_size,
            ..Default::default()
        }
    }

    fn offsets(list: &RankedList<Region>) -> Vec<u64> {
        list.iter().map(Region::offset).collect()
    }

    #[test]
    fn test_rank_regions_by_length_then_offset() {
        let long = Region::new("CCCC".to_string(), 90);
        let short_early = Region::new("CC".to_string(), 10);
        let short_late = Region::new("GG".to_string(), 70);

        assert_eq!(rank_regions(&long, &short_early), Ordering::Less);
        assert_eq!(rank_regions(&short_early, &long), Ordering::Greater);
        assert_eq!(rank_regions(&short_early, &short_late), Ordering::Less);
        assert_eq!(rank_regions(&short_late, &short_late), Ordering::Equal);
    }

    #[test]
    fn test_probe_correction() {
        assert_eq!(probe_correction("CCAUGCCUAG"), 0);
        assert_eq!(probe_correction("CUAGCCAUGC"), 4);
        assert_eq!(probe_correction("CCCCCC"), 0);
        assert_eq!(probe_correction("CCUAGCC"), 0);
        assert_eq!(probe_correction("CCAUGCC"), 0);
    }

    #[test]
    fn test_candidates_are_ranked() {
        // windows of 10:
        // "AUGCUAGCCC" -> "C" at 3
        // "AUGCCCUAGC" -> "CCC" at 13
        // "CAUGGGUAGC" -> "GG" at 24
        // "AUGAAAUAGC" -> "AAA" at 33
        let sequence = "AUGCUAGCCCAUGCCCUAGCCAUGGGUAGCAUGAAAUAGC";
        let mut sample = InMemorySample::new(sequence);

        let candidates =
            find_candidates(&mut sample, 0, sequence.len() as u64, &config(10), |_| true)
                .unwrap();

        assert_eq!(candidates.len(), 4);
        assert_eq!(offsets(&candidates), vec![13, 33, 24, 3]);
        let best = candidates.peek_best().unwrap();
        assert_eq!(best.encoding(), "CCC");
    }

    #[test]
    fn test_predicate_filters_regions() {
        let sequence = "AUGCUAGCCCAUGCCCUAGCCAUGGGUAGCAUGAAAUAGC";
        let mut sample = InMemorySample::new(sequence);

        let candidates = find_candidates(&mut sample, 0, sequence.len() as u64, &config(10), |r| {
            r.encoding().contains('A') || r.len() == 1
        })
        .unwrap();

        assert_eq!(offsets(&candidates), vec![33, 3]);
    }

    #[test]
    fn test_tail_window_is_scanned() {
        // full window "GGGGGGGGGG" holds nothing, the 6-nt tail "AUGUAG" an empty region
        let sequence = "GGGGGGGGGGAUGUAG";
        let mut sample = InMemorySample::new(sequence);

        let candidates =
            find_candidates(&mut sample, 0, sequence.len() as u64, &config(10), |_| true)
                .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.peek_best(), Some(&Region::new(String::new(), 13)));
    }

    #[test]
    fn test_leading_stop_codon_shifts_windows() {
        // The probe starts on "CUAG" before the first "AUG": windows begin at 4
        let sequence = "CUAGAUGCCUAGCC";
        let mut sample = InMemorySample::new(sequence);

        let candidates =
            find_candidates(&mut sample, 0, sequence.len() as u64, &config(10), |_| true)
                .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.peek_best(), Some(&Region::new("CC".to_string(), 7)));
    }

    #[test]
    fn test_probe_is_relative_to_start() {
        let sequence = "GGGGGCUAGAUGCCUAGCC";
        let mut sample = InMemorySample::new(sequence);

        let candidates =
            find_candidates(&mut sample, 5, sequence.len() as u64, &config(10), |_| true)
                .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.peek_best(), Some(&Region::new("CC".to_string(), 12)));
    }

    #[test]
    fn test_results_sorted_for_every_adjacent_pair() {
        let sequence = "AUGCCUAGGGAUGUAGGGGGAUGCCCCUAGAUGCCUAGGGAUGAUAGGGG".repeat(8);
        let mut sample = InMemorySample::new(sequence.as_str());

        let candidates =
            find_candidates(&mut sample, 0, sequence.len() as u64, &config(10), |_| true)
                .unwrap();

        let ranked: Vec<&Region> = candidates.iter().collect();
        assert!(!ranked.is_empty());
        for pair in ranked.windows(2) {
            assert_ne!(rank_regions(pair[0], pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_scan_near_address_limit() {
        let base = u64::MAX - 14;
        let mut sample = OffsetSample {
            base,
            inner: InMemorySample::new("CUAGAUGCCUAGCC"),
        };

        let candidates =
            find_candidates(&mut sample, base, u64::MAX, &config(10), |_| true).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates.peek_best(),
            Some(&Region::new("CC".to_string(), base + 7))
        );
    }

    #[test]
    fn test_probe_shift_saturates_at_address_limit() {
        let base = u64::MAX - 2;
        let mut sample = OffsetSample {
            base,
            inner: InMemorySample::new("CUAGAUG"),
        };

        let candidates =
            find_candidates(&mut sample, base, u64::MAX, &config(10), |_| true).unwrap();

        assert!(candidates.is_empty());
    }
}
