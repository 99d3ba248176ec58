use crate::algorithms;
use crate::config::AnalyzerConfig;
use crate::ranked_list::RankedList;
use crate::sample::SequenceProvider;
use crate::scanner::RegionScanner;
use crate::types::{GenomatchError, Region, RegionPair, SampleSlot};

/// Sequence analyzer for one or two samples.
///
/// An analyzer built with [`single`](Self::single) can only look for
/// candidate regions in its sample; the two-sample operations
/// ([`longest_shared_sequence`](Self::longest_shared_sequence) and
/// [`match_regions`](Self::match_regions)) fail with
/// [`GenomatchError::MissingSecondSample`] before reading anything.
///
/// Every operation reads the samples through bounded windows or chunks, so the
/// sequences may be far larger than memory.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::SequenceAnalyzer;
/// use genomatch_core::sample::InMemorySample;
///
/// let mut analyzer = SequenceAnalyzer::pair(
///     InMemorySample::new("CCAUGAAGUAGCC"),
///     InMemorySample::new("GGAUGAAGUAGGG"),
/// );
///
/// let shared = analyzer.longest_shared_sequence(0, 13)?;
/// assert_eq!(shared, vec!["AUGAAGUAG"]);
///
/// let pairs = analyzer.match_regions(0, 13, |a, b| a.encoding() == b.encoding())?;
/// assert_eq!(pairs.len(), 1);
/// # Ok::<(), genomatch_core::types::GenomatchError>(())
/// ```
#[derive(Debug)]
pub struct SequenceAnalyzer<P: SequenceProvider> {
    /// Scanning geometry
    pub config: AnalyzerConfig,
    first: P,
    second: Option<P>,
}

impl<P: SequenceProvider> SequenceAnalyzer<P> {
    /// Creates an analyzer for a single sample with the default configuration.
    pub fn single(sample: P) -> Self {
        Self::with_config(AnalyzerConfig::default(), sample, None)
    }

    /// Creates an analyzer for two samples with the default configuration.
    pub fn pair(first: P, second: P) -> Self {
        Self::with_config(AnalyzerConfig::default(), first, Some(second))
    }

    /// Creates an analyzer with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genomatch_core::SequenceAnalyzer;
    /// use genomatch_core::config::AnalyzerConfig;
    /// use genomatch_core::sample::InMemorySample;
    ///
    /// let config = AnalyzerConfig {
    ///     chunk_size: 1_000_000,
    ///     ..Default::default()
    /// };
    /// let analyzer = SequenceAnalyzer::with_config(config, InMemorySample::new("AUG"), None);
    /// assert!(!analyzer.has_two_samples());
    /// ```
    pub const fn with_config(config: AnalyzerConfig, first: P, second: Option<P>) -> Self {
        Self {
            config,
            first,
            second,
        }
    }

    pub const fn has_two_samples(&self) -> bool {
        self.second.is_some()
    }

    fn sample_mut(&mut self, slot: SampleSlot) -> Result<&mut P, GenomatchError> {
        match slot {
            SampleSlot::First => Ok(&mut self.first),
            SampleSlot::Second => self
                .second
                .as_mut()
                .ok_or(GenomatchError::MissingSecondSample),
        }
    }

    fn both_samples_mut(&mut self) -> Result<(&mut P, &mut P), GenomatchError> {
        let second = self
            .second
            .as_mut()
            .ok_or(GenomatchError::MissingSecondSample)?;
        Ok((&mut self.first, second))
    }

    /// Finds the longest runs of identical, position-aligned nucleotides shared
    /// by the two samples over `[start, end)`.
    ///
    /// Ties are returned in scan order. A run crossing a chunk boundary is
    /// reported whole.
    ///
    /// # Errors
    ///
    /// - [`GenomatchError::MissingSecondSample`] when the analyzer holds one sample
    /// - [`GenomatchError::InvalidRange`] when `start > end`
    /// - any error raised by the samples while reading
    pub fn longest_shared_sequence(
        &mut self,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, GenomatchError> {
        let chunk_size = self.config.chunk_size;
        let (first, second) = self.both_samples_mut()?;
        check_range(start, end)?;

        log::info!("Comparing samples over [{}, {})", start, end);
        let shared = algorithms::longest_shared_sequence(first, second, start, end, chunk_size)?;
        log::info!(
            "Found {} shared sequence(s) of length {}",
            shared.len(),
            shared.first().map_or(0, String::len)
        );
        Ok(shared)
    }

    /// Lazily scans one sample over `[start, end)`, one item per window.
    ///
    /// # Errors
    ///
    /// Fails with [`GenomatchError::MissingSecondSample`] when asked for the
    /// second sample of a single-sample analyzer, and with
    /// [`GenomatchError::InvalidRange`] when `start > end`.
    pub fn regions(
        &mut self,
        start: u64,
        end: u64,
        slot: SampleSlot,
    ) -> Result<RegionScanner<'_, P>, GenomatchError> {
        let window_size = self.config.window_size;
        let sample = self.sample_mut(slot)?;
        check_range(start, end)?;
        Ok(RegionScanner::new(sample, start, end, window_size))
    }

    /// Finds the coding regions of one sample that satisfy `predicate`.
    ///
    /// Regions come back ranked longest first, ties broken by lower offset.
    ///
    /// # Errors
    ///
    /// Same conditions as [`regions`](Self::regions), plus any error raised by
    /// the sample while reading.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genomatch_core::SequenceAnalyzer;
    /// use genomatch_core::sample::InMemorySample;
    /// use genomatch_core::types::SampleSlot;
    ///
    /// let mut analyzer = SequenceAnalyzer::single(InMemorySample::new("AUGCCCUAGG"));
    /// let candidates = analyzer.find_candidates(0, 10, SampleSlot::First, |r| r.len() >= 3)?;
    ///
    /// assert_eq!(candidates.peek_best().map(|r| r.encoding()), Some("CCC"));
    /// # Ok::<(), genomatch_core::types::GenomatchError>(())
    /// ```
    pub fn find_candidates<F>(
        &mut self,
        start: u64,
        end: u64,
        slot: SampleSlot,
        predicate: F,
    ) -> Result<RankedList<Region>, GenomatchError>
    where
        F: FnMut(&Region) -> bool,
    {
        let config = self.config.clone();
        let sample = self.sample_mut(slot)?;
        check_range(start, end)?;

        log::info!("Scanning {} sample over [{}, {})", slot, start, end);
        let candidates = algorithms::find_candidates(sample, start, end, &config, predicate)?;
        log::info!("Accepted {} candidate region(s)", candidates.len());
        Ok(candidates)
    }

    /// Finds region pairs, one per sample at the same window, that satisfy
    /// `predicate`.
    ///
    /// Pairs come back ranked by the first sample's region: longest first,
    /// ties broken by lower offset.
    ///
    /// # Errors
    ///
    /// - [`GenomatchError::MissingSecondSample`] when the analyzer holds one sample
    /// - [`GenomatchError::InvalidRange`] when `start > end`
    /// - any error raised by the samples while reading
    pub fn match_regions<F>(
        &mut self,
        start: u64,
        end: u64,
        predicate: F,
    ) -> Result<RankedList<RegionPair>, GenomatchError>
    where
        F: FnMut(&Region, &Region) -> bool,
    {
        let window_size = self.config.window_size;
        let (first, second) = self.both_samples_mut()?;
        check_range(start, end)?;

        log::info!("Matching regions over [{}, {})", start, end);
        let matched =
            algorithms::match_regions(first, second, start, end, window_size, predicate)?;
        log::info!("Accepted {} region pair(s)", matched.len());
        Ok(matched)
    }
}

fn check_range(start: u64, end: u64) -> Result<(), GenomatchError> {
    if start > end {
        return Err(GenomatchError::InvalidRange { start, end });
    }
    Ok(())
}
