use crate::sample::{SequenceProvider, transcribe};
use crate::types::*;
use bio::io::fasta;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One row of a samtools-style `.fai` index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaiRow {
    pub name: String,
    /// Number of bases in the record
    pub length: u64,
    /// Byte offset of the first base
    pub offset: u64,
    /// Bases per full line
    pub line_bases: u64,
    /// Bytes per full line, line terminator included
    pub line_width: u64,
}

impl FaiRow {
    fn to_fai_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\n",
            self.name, self.length, self.offset, self.line_bases, self.line_width
        )
    }
}

/// Scan a FASTA stream once and compute the `.fai` row of every record.
///
/// Every line of a record but the last must hold the same number of bases,
/// as random access by offset depends on it. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`GenomatchError::ParseError`] for sequence data before the first
/// header, a header without a name, or uneven line lengths inside a record.
pub fn build_fai_rows<R: BufRead>(mut reader: R) -> Result<Vec<FaiRow>, GenomatchError> {
    let mut rows = Vec::new();
    let mut current: Option<FaiRow> = None;
    let mut short_line_seen = false;
    let mut line = Vec::new();
    let mut position: u64 = 0;

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }
        position += read as u64;

        if line.first() == Some(&b'>') {
            rows.extend(current.take());
            let header = String::from_utf8_lossy(&line[1..]);
            let name = header.split_whitespace().next().ok_or_else(|| {
                GenomatchError::ParseError(format!(
                    "FASTA header without a name at byte {}",
                    position - read as u64
                ))
            })?;
            current = Some(FaiRow {
                name: name.to_string(),
                length: 0,
                offset: position,
                line_bases: 0,
                line_width: 0,
            });
            short_line_seen = false;
            continue;
        }

        let bases = line
            .iter()
            .rev()
            .skip_while(|&&byte| byte == b'\n' || byte == b'\r')
            .count() as u64;
        if bases == 0 {
            continue;
        }
        let Some(row) = current.as_mut() else {
            return Err(GenomatchError::ParseError(
                "Sequence data before the first FASTA header".to_string(),
            ));
        };

        if row.line_bases == 0 {
            row.line_bases = bases;
            row.line_width = read as u64;
        } else if short_line_seen || bases > row.line_bases {
            return Err(GenomatchError::ParseError(format!(
                "Record {} has uneven line lengths",
                row.name
            )));
        }
        short_line_seen |= bases < row.line_bases;
        row.length += bases;
    }

    rows.extend(current);
    Ok(rows)
}

fn fai_path(path: &Path) -> PathBuf {
    let mut fai = path.as_os_str().to_owned();
    fai.push(".fai");
    PathBuf::from(fai)
}

/// Reads `<path>.fai` when present, otherwise indexes the FASTA file itself
fn load_index(path: &Path) -> Result<fasta::Index, GenomatchError> {
    let fai = fai_path(path);
    if fai.exists() {
        log::debug!("Reading FASTA index {}", fai.display());
        return fasta::Index::from_file(&fai)
            .map_err(|e| GenomatchError::ParseError(e.to_string()));
    }

    log::debug!("No index next to {}, indexing it", path.display());
    let rows = build_fai_rows(BufReader::new(File::open(path)?))?;
    let text: String = rows.iter().map(FaiRow::to_fai_line).collect();
    fasta::Index::new(text.as_bytes()).map_err(|e| GenomatchError::ParseError(e.to_string()))
}

/// A sample backed by one record of a FASTA file on disk.
///
/// An existing `<path>.fai` is used as is. Without one, the file is indexed in
/// a single pass when the sample is opened, and nothing is written to disk.
/// Afterwards only the requested snippet is ever read from the file. Requests
/// running past the end of the record are clamped to it.
///
/// # Examples
///
/// ```rust,no_run
/// use genomatch_core::sample::{IndexedFastaSample, SequenceProvider};
///
/// let mut sample = IndexedFastaSample::open("chr1.fa", None, true)?;
/// println!("{} ({} nt)", sample.record_name(), sample.len());
/// let window = sample.get_snippet(1_000_000, 60)?;
/// # Ok::<(), genomatch_core::types::GenomatchError>(())
/// ```
pub struct IndexedFastaSample {
    reader: fasta::IndexedReader<File>,
    record_name: String,
    length: u64,
    transcribe: bool,
}

impl IndexedFastaSample {
    /// Open `record` of the FASTA file at `path`, or its first record when
    /// `record` is `None`.
    ///
    /// When `transcribe` is set, every snippet is rewritten from the DNA to the
    /// RNA alphabet before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GenomatchError::IoError`] if the file cannot be opened,
    /// [`GenomatchError::ParseError`] if it cannot be indexed, and
    /// [`GenomatchError::UnknownRecord`] if the record is missing.
    pub fn open<P: AsRef<Path>>(
        path: P,
        record: Option<&str>,
        transcribe: bool,
    ) -> Result<Self, GenomatchError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let index = load_index(path)?;

        let sequences = index.sequences();
        let selected = match record {
            Some(name) => sequences.into_iter().find(|sequence| sequence.name == name),
            None => sequences.into_iter().next(),
        }
        .ok_or_else(|| {
            GenomatchError::UnknownRecord(record.unwrap_or("<first record>").to_string())
        })?;

        log::debug!(
            "Indexed {} ({} nt) from {}",
            selected.name,
            selected.len,
            path.display()
        );

        Ok(Self {
            reader: fasta::IndexedReader::with_index(file, index),
            record_name: selected.name,
            length: selected.len,
            transcribe,
        })
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub const fn len(&self) -> u64 {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl SequenceProvider for IndexedFastaSample {
    fn get_snippet(&mut self, offset: u64, length: usize) -> Result<String, GenomatchError> {
        if offset >= self.length || length == 0 {
            return Ok(String::new());
        }
        let stop = offset.saturating_add(length as u64).min(self.length);

        let mut snippet = Vec::with_capacity((stop - offset) as usize);
        self.reader.fetch(&self.record_name, offset, stop)?;
        self.reader.read(&mut snippet)?;
        if self.transcribe {
            transcribe(&mut snippet);
        }

        String::from_utf8(snippet).map_err(|e| GenomatchError::ParseError(e.to_string()))
    }
}
