//! Scans text against a built Trie.

use std::io::Read;

use tracing::{debug, info};

use crate::error::Result;
use crate::trie::{Classification, Trie};
use crate::words::{WordOptions, Words};

/// What a scan consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Words read from the source.
    pub words: usize,
    /// Words whose every letter matched a node.
    pub matched: usize,
    /// Words which left the Trie and changed nothing.
    pub unmatched: usize,
}

/// Process every word of `reader` against the Trie.
pub fn scan<R: Read>(trie: &mut Trie, reader: R, options: WordOptions) -> Result<ScanStats> {
    scan_from(trie, Words::new(reader, options))
}

/// Process every word of a word source against the Trie. The first error
/// from the source stops the scan and is returned; counters already
/// updated stay updated.
pub fn scan_from<I, S>(trie: &mut Trie, words: I) -> Result<ScanStats>
where
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut stats = ScanStats::default();
    for word in words {
        let word = word?;
        let word = word.as_ref();
        stats.words += 1;
        match trie.process(word) {
            Classification::Unmatched => stats.unmatched += 1,
            Classification::Matched {
                occurrence,
                superwords,
                prefixes,
            } => {
                stats.matched += 1;
                debug!(word, occurrence, superwords, prefixes, "matched");
            }
        }
    }
    info!(
        words = stats.words,
        matched = stats.matched,
        unmatched = stats.unmatched,
        "data scanned"
    );
    Ok(stats)
}
