// =============================================================================
// Codons
// =============================================================================

/// Codon that opens a coding region
pub const START_CODON: &str = "AUG";

/// Codon that closes a coding region
pub const STOP_CODON: &str = "UAG";

/// Length of a codon in nucleotides
pub const CODON_LENGTH: usize = 3;

// =============================================================================
// Scanning geometry
// =============================================================================

/// Number of nucleotides per region-scanning window
pub const WINDOW_SIZE: usize = 60;

/// Number of nucleotides per chunk when comparing two samples position by position
pub const CHUNK_SIZE: usize = 10_000_000;

/// Length of the snippet read at the start of a candidate scan to pick the first window
pub const PROBE_LENGTH: usize = 115;
