//! # genomatch CLI
//!
//! A command-line interface for scanning and matching genomic samples stored
//! as FASTA files.
//!
//! ## Usage
//!
//! ```bash
//! # Longest shared sequences between two samples
//! genomatch shared -a alice.fa -b bob.fa --dna
//!
//! # Candidate coding regions of one sample, at least 30 nt long
//! genomatch candidates -a alice.fa -m 30 -f fasta -o regions.fa
//!
//! # Region pairs drawn from both samples over the first megabase
//! genomatch match -a alice.fa -b bob.fa -s 0 -e 1000000
//! ```
//!
//! ## Options
//!
//! - `-a, --first <FILE>`: FASTA file of the first sample
//! - `-b, --second <FILE>`: FASTA file of the second sample
//! - `--first-record`, `--second-record <NAME>`: record to read (default: first record)
//! - `-s, --start <INDEX>`: first nucleotide to scan (default: 0)
//! - `-e, --end <INDEX>`: end of the scanned range, exclusive (default: sample length)
//! - `-f, --format <FORMAT>`: tsv or fasta (default: tsv)
//! - `-o, --output <FILE>`: output file (default: stdout)
//! - `--dna`: input is DNA, transcribe T to U on read
//! - `-q, --quiet` / `-v, --verbose`: log level

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use genomatch_core::SequenceAnalyzer;
use genomatch_core::config::{AnalyzerConfig, OutputFormat};
use genomatch_core::output::{write_pairs, write_regions, write_shared_sequences};
use genomatch_core::sample::IndexedFastaSample;
use genomatch_core::types::{GenomatchError, SampleSlot};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn common_args() -> Vec<Arg> {
    vec![
        Arg::new("first")
            .short('a')
            .long("first")
            .value_name("FILE")
            .required(true)
            .help("FASTA file of the first sample"),
        Arg::new("first-record")
            .long("first-record")
            .value_name("NAME")
            .help("Record of the first FASTA file (default: first record)"),
        Arg::new("start")
            .short('s')
            .long("start")
            .value_name("INDEX")
            .value_parser(value_parser!(u64))
            .default_value("0")
            .help("First nucleotide to scan"),
        Arg::new("end")
            .short('e')
            .long("end")
            .value_name("INDEX")
            .value_parser(value_parser!(u64))
            .help("End of the scanned range, exclusive (default: sample length)"),
        Arg::new("format")
            .short('f')
            .long("format")
            .value_name("FORMAT")
            .help("Output format: tsv, fasta")
            .default_value("tsv"),
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Output file (default: stdout)"),
        Arg::new("dna")
            .long("dna")
            .action(ArgAction::SetTrue)
            .help("Input is DNA; transcribe T to U on read"),
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Only log errors"),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .conflicts_with("quiet")
            .help("Log per-chunk progress"),
    ]
}

fn second_sample_args(required: bool) -> Vec<Arg> {
    vec![
        Arg::new("second")
            .short('b')
            .long("second")
            .value_name("FILE")
            .required(required)
            .help("FASTA file of the second sample"),
        Arg::new("second-record")
            .long("second-record")
            .value_name("NAME")
            .help("Record of the second FASTA file (default: first record)"),
    ]
}

fn min_length_arg() -> Arg {
    Arg::new("min-length")
        .short('m')
        .long("min-length")
        .value_name("LENGTH")
        .value_parser(value_parser!(usize))
        .default_value("0")
        .help("Minimum region length to report")
}

fn cli() -> Command {
    Command::new("genomatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Coding-region scanning and sequence matching for genomic samples")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("shared")
                .about("Longest sequences shared position by position by two samples")
                .args(common_args())
                .args(second_sample_args(true)),
        )
        .subcommand(
            Command::new("candidates")
                .about("Candidate coding regions of one sample, longest first")
                .args(common_args())
                .args(second_sample_args(false))
                .arg(min_length_arg())
                .arg(
                    Arg::new("which")
                        .short('w')
                        .long("which")
                        .value_name("SAMPLE")
                        .default_value("first")
                        .help("Sample to scan: first or second"),
                ),
        )
        .subcommand(
            Command::new("match")
                .about("Region pairs found at the same window in both samples")
                .args(common_args())
                .args(second_sample_args(true))
                .arg(min_length_arg()),
        )
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        log::LevelFilter::Error
    } else if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn open_sample(
    matches: &ArgMatches,
    path_id: &str,
    record_id: &str,
) -> Result<Option<IndexedFastaSample>, GenomatchError> {
    let Some(path) = matches.get_one::<String>(path_id) else {
        return Ok(None);
    };
    let record = matches.get_one::<String>(record_id).map(String::as_str);
    let sample = IndexedFastaSample::open(path, record, matches.get_flag("dna"))?;
    log::info!(
        "Loaded {} sample {} ({} nt)",
        path_id,
        sample.record_name(),
        sample.len()
    );
    Ok(Some(sample))
}

/// Main entry point for the genomatch CLI application.
///
/// Parses command-line arguments, opens the samples, runs the requested scan
/// and writes the results in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();
    let (command, sub) = matches
        .subcommand()
        .ok_or("A subcommand is required")?;

    init_logging(sub);

    let format: OutputFormat = sub
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::default()), |s| s.parse())?;
    let start = sub.get_one::<u64>("start").copied().unwrap_or(0);
    let end = sub.get_one::<u64>("end").copied();

    let first = open_sample(sub, "first", "first-record")?.ok_or("Missing first sample")?;
    let second = open_sample(sub, "second", "second-record")?;

    let mut writer: Box<dyn Write> = if let Some(output_file) = sub.get_one::<String>("output") {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let min_length = || sub.get_one::<usize>("min-length").copied().unwrap_or(0);

    match command {
        "shared" => {
            let end = end.unwrap_or(first.len());
            let second = second.ok_or(GenomatchError::MissingSecondSample)?;
            let mut analyzer = SequenceAnalyzer::pair(first, second);
            let shared = analyzer.longest_shared_sequence(start, end)?;
            write_shared_sequences(&mut writer, &shared, format)?;
            log::info!(
                "Analysis complete! Found {} shared sequence(s) of length {}.",
                shared.len(),
                shared.first().map_or(0, String::len)
            );
        }
        "candidates" => {
            let slot: SampleSlot = sub
                .get_one::<String>("which")
                .map_or(Ok(SampleSlot::First), |s| s.parse())?;
            let end = end.unwrap_or(match (slot, &second) {
                (SampleSlot::Second, Some(sample)) => sample.len(),
                _ => first.len(),
            });
            let min_length = min_length();
            let mut analyzer =
                SequenceAnalyzer::with_config(AnalyzerConfig::default(), first, second);
            let candidates =
                analyzer.find_candidates(start, end, slot, |region| region.len() >= min_length)?;
            write_regions(&mut writer, &candidates, format)?;
            log::info!(
                "Analysis complete! Found {} candidate region(s) in the {} sample.",
                candidates.len(),
                slot
            );
        }
        "match" => {
            let end = end.unwrap_or(first.len());
            let second = second.ok_or(GenomatchError::MissingSecondSample)?;
            let min_length = min_length();
            let mut analyzer = SequenceAnalyzer::pair(first, second);
            let pairs = analyzer.match_regions(start, end, |a, b| {
                a.len() >= min_length && b.len() >= min_length
            })?;
            write_pairs(&mut writer, &pairs, format)?;
            log::info!("Analysis complete! Found {} region pair(s).", pairs.len());
        }
        other => return Err(format!("Unknown subcommand: {}", other).into()),
    }

    writer.flush()?;
    Ok(())
}
