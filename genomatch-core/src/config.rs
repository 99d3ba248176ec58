use crate::constants::{CHUNK_SIZE, PROBE_LENGTH, WINDOW_SIZE};

/// Output format options for scan results.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::config::OutputFormat;
///
/// let format: OutputFormat = "fasta".parse().unwrap();
/// assert_eq!(format, OutputFormat::Fasta);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated columns, one result per line.
    #[default]
    Tsv,

    /// One FASTA record per region or shared sequence, with the offset and
    /// length in the header line.
    Fasta,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv" => Ok(Self::Tsv),
            "fasta" | "fa" => Ok(Self::Fasta),
            other => Err(format!("Invalid output format: {}", other)),
        }
    }
}

/// Scanning geometry for a [`SequenceAnalyzer`](crate::engine::SequenceAnalyzer).
///
/// The defaults match the documented constants; smaller values are mostly
/// useful for exercising chunk boundaries on short sequences.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig {
///     chunk_size: 1_000,
///     ..Default::default()
/// };
/// assert_eq!(config.window_size, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Length of each region-scanning window.
    ///
    /// **Default**: 60
    pub window_size: usize,

    /// Length of each chunk compared during longest-shared-sequence scans.
    ///
    /// Only one chunk per sample is held in memory at a time. A match that
    /// runs across a chunk boundary is still reported as one sequence.
    ///
    /// **Default**: 10,000,000
    pub chunk_size: usize,

    /// Length of the snippet inspected before a candidate scan to decide
    /// where the first window starts.
    ///
    /// **Default**: 115
    pub probe_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            chunk_size: CHUNK_SIZE,
            probe_length: PROBE_LENGTH,
        }
    }
}
