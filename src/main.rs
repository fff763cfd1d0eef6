use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordtally::words::{self, Oversized, WordOptions, MAX_WORD_LEN};
use wordtally::{dictionary, report, scan, Trie};

/// Count how often each dictionary word occurs in a text, how often it is
/// extended by a longer word and how often a shorter word leads into it.
///
/// Prints `<word> <occurrences> <prefixes> <superwords>` per dictionary
/// word, in lexicographic order.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File holding the dictionary words
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// File holding the text to scan
    #[arg(value_name = "DATA")]
    data: PathBuf,

    /// Longest run of letters accepted as a word
    #[arg(
        long,
        default_value_t = MAX_WORD_LEN,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_word_len: usize,

    /// What to do with words longer than --max-word-len
    #[arg(long, value_enum, default_value_t = Oversized::Reject)]
    oversized: Oversized,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Log to stderr so stdout only carries the report. RUST_LOG wins over -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = WordOptions {
        max_len: cli.max_word_len,
        oversized: cli.oversized,
    };

    // Open both inputs before doing any work
    let dictionary_words = words::open(&cli.dictionary, options)?;
    let data_words = words::open(&cli.data, options)?;

    let mut trie = Trie::new();
    let built = dictionary::build_from(&mut trie, dictionary_words)
        .with_context(|| format!("reading dictionary {}", cli.dictionary.display()))?;
    info!(path = %cli.dictionary.display(), words = built.words, added = built.added, "loaded dictionary");

    let scanned = scan::scan_from(&mut trie, data_words)
        .with_context(|| format!("scanning {}", cli.data.display()))?;
    info!(path = %cli.data.display(), words = scanned.words, matched = scanned.matched, "scanned data");

    let stdout = io::stdout();
    report::write_report(&trie, BufWriter::new(stdout.lock())).context("writing report")?;
    Ok(())
}
