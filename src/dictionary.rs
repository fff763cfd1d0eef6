//! Builds a Trie from the words of a dictionary.

use std::io::Read;

use tracing::{info, trace};

use crate::error::Result;
use crate::trie::Trie;
use crate::words::{WordOptions, Words};

/// What a build consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Words read from the source, duplicates included.
    pub words: usize,
    /// Words which became new entries.
    pub added: usize,
}

/// Insert every word of `reader` into the Trie.
pub fn build<R: Read>(trie: &mut Trie, reader: R, options: WordOptions) -> Result<BuildStats> {
    build_from(trie, Words::new(reader, options))
}

/// Insert every word of a word source into the Trie. The first error from
/// the source stops the build and is returned.
pub fn build_from<I, S>(trie: &mut Trie, words: I) -> Result<BuildStats>
where
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut stats = BuildStats::default();
    for word in words {
        let word = word?;
        let word = word.as_ref();
        stats.words += 1;
        if trie.insert(word) {
            stats.added += 1;
            trace!(word, "added dictionary entry");
        } else {
            trace!(word, "skipped dictionary word");
        }
    }
    info!(
        words = stats.words,
        entries = trie.count(),
        nodes = trie.node_count(),
        "dictionary built"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::words::Oversized;

    #[test]
    fn it_builds_from_a_reader() {
        let mut trie = Trie::new();
        let stats = build(
            &mut trie,
            "cat\ncatalog\n\nDog, cat.".as_bytes(),
            WordOptions::default(),
        )
        .expect("building");
        assert_eq!(stats, BuildStats { words: 4, added: 3 });
        assert!(trie.contains("cat"));
        assert!(trie.contains("catalog"));
        assert!(trie.contains("dog"));
        assert_eq!(trie.count(), 3);
    }

    #[test]
    fn it_builds_identically_with_duplicates() {
        let mut once = Trie::new();
        build(&mut once, "alpha beta".as_bytes(), WordOptions::default()).expect("building");
        let mut twice = Trie::new();
        build(
            &mut twice,
            "alpha beta alpha beta".as_bytes(),
            WordOptions::default(),
        )
        .expect("building");
        assert_eq!(once, twice);
        assert_eq!(once.node_count(), twice.node_count());
    }

    #[test]
    fn it_builds_nothing_from_an_empty_source() {
        let mut trie = Trie::new();
        let stats = build(&mut trie, "".as_bytes(), WordOptions::default()).expect("building");
        assert_eq!(stats, BuildStats::default());
        assert!(trie.is_empty());
    }

    #[test]
    fn it_accepts_any_word_source() {
        let mut trie = Trie::new();
        let stats = build_from(&mut trie, ["tea", "team"].map(Ok::<_, Error>)).expect("building");
        assert_eq!(stats.added, 2);
    }

    #[test]
    fn it_stops_on_a_read_error() {
        let mut trie = Trie::new();
        let words = vec![
            Ok("cat"),
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk gone",
            ))),
            Ok("dog"),
        ];
        let result = build_from(&mut trie, words);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(trie.contains("cat"));
        assert!(!trie.contains("dog"));
    }

    #[test]
    fn it_stops_at_the_first_source_error() {
        let mut trie = Trie::new();
        let options = WordOptions {
            max_len: 3,
            oversized: Oversized::Reject,
        };
        let result = build(&mut trie, "cat house dog".as_bytes(), options);
        assert!(matches!(result, Err(Error::WordTooLong { length: 5, .. })));
        assert!(trie.contains("cat"));
        assert!(!trie.contains("dog"));
    }
}
