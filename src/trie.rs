//! Provides a letter Trie which tallies how scanned words relate to the
//! dictionary words it holds.
//!
//! Dictionary words are inserted first. Each one marks the node at the end
//! of its letter path as an entry. Words from a separate text are then
//! processed one at a time and every entry accumulates three counters:
//!  - occurrences: the scanned word was exactly the entry
//!  - superwords: the entry was a strict leading prefix of the scanned word
//!  - prefixes: the scanned word was a strict leading prefix of the entry
//!
//! Letters are ASCII and are folded to lowercase. Children of a node are
//! kept in ascending key order, so walking the Trie depth first visits the
//! entries in lexicographic order.
//!
//! Example 1
//! ```
//! use wordtally::trie::{Counts, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("cat");
//! trie.insert("catalog");
//!
//! for word in ["cat", "catalog", "dog", "cats"] {
//!     trie.process(word);
//! }
//!
//! assert_eq!(
//!     trie.get("cat"),
//!     Some(Counts { occurrences: 1, prefixes: 0, superwords: 1 })
//! );
//! assert_eq!(
//!     trie.get("catalog"),
//!     Some(Counts { occurrences: 1, prefixes: 1, superwords: 0 })
//! );
//! ```
//!
//! Example 2
//! ```
//! use wordtally::trie::{Classification, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("tea");
//! trie.insert("team");
//! trie.insert("teapot");
//!
//! // "te" is a path in the Trie, every entry below it is credited
//! assert_eq!(
//!     trie.process("te"),
//!     Classification::Matched {
//!         occurrence: false,
//!         superwords: 0,
//!         prefixes: 3,
//!     }
//! );
//! // "tex" leaves the Trie, nothing changes
//! assert_eq!(trie.process("tex"), Classification::Unmatched);
//! ```

use crate::iterator::Entries;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Counters accumulated by a dictionary entry while scanning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Counts {
    /// Scanned words equal to the entry.
    pub occurrences: u64,
    /// Fully matched scanned words which are a strict prefix of the entry.
    pub prefixes: u64,
    /// Scanned words which strictly extend the entry.
    pub superwords: u64,
}

/// The effect a single scanned word had on the Trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Some letter of the word had no matching node. No counters changed.
    Unmatched,
    /// Every letter of the word matched a node.
    Matched {
        /// The word is itself an entry and its occurrences went up.
        occurrence: bool,
        /// Entries along the path which the word extends.
        superwords: usize,
        /// Entries below the word's final node.
        prefixes: usize,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node {
    pub(crate) children: Vec<Node>,
    pub(crate) key: u8,
    pub(crate) terminated: bool,
    pub(crate) counts: Counts,
}

/// Stores dictionary words as paths of letter nodes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie {
    pub(crate) head: Node,
    count: usize,
}

impl Node {
    fn new(key: u8) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    /// Find the child keyed by `letter`. If there isn't one and `create`
    /// is set, a new child is inserted in key order and returned.
    pub(crate) fn find_or_insert_child(&mut self, letter: u8, create: bool) -> Option<&mut Node> {
        let letter = letter.to_ascii_lowercase();
        match self.children.binary_search_by_key(&letter, |n| n.key) {
            Ok(idx) => Some(&mut self.children[idx]),
            Err(idx) if create => {
                self.children.insert(idx, Node::new(letter));
                Some(&mut self.children[idx])
            }
            Err(_) => None,
        }
    }

    fn find_child(&self, letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        self.children
            .binary_search_by_key(&letter, |n| n.key)
            .ok()
    }

    /// Credit a prefix to every entry strictly below this node. Returns
    /// the number of entries credited.
    fn propagate_prefixes(&mut self) -> usize {
        let mut credited = 0;
        for child in self.children.iter_mut() {
            if child.terminated {
                child.counts.prefixes += 1;
                credited += 1;
            }
            credited += child.propagate_prefixes();
        }
        credited
    }

    fn descendants(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendants()).sum()
    }
}

impl Trie {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self {
            head: Node::default(),
            ..Default::default()
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::default();
        self.count = 0;
    }

    /// Is the word a dictionary entry?
    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.find(word.as_ref()).is_some_and(|n| n.terminated)
    }

    /// Is there a letter path for the prefix? It need not end at an entry.
    pub fn contains_prefix<P: AsRef<[u8]>>(&self, prefix: P) -> bool {
        self.find(prefix.as_ref()).is_some()
    }

    /// How many dictionary entries does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// How many letter nodes does the Trie contain?
    pub fn node_count(&self) -> usize {
        self.head.descendants()
    }

    /// Get the counters of a dictionary entry.
    pub fn get<W: AsRef<[u8]>>(&self, word: W) -> Option<Counts> {
        self.find(word.as_ref())
            .filter(|n| n.terminated)
            .map(|n| n.counts)
    }

    /// Insert a dictionary word. Returns true if the word was not already
    /// an entry.
    ///
    /// Words must be non-empty and made only of ASCII letters, anything
    /// else is ignored and false is returned. Counters are never touched.
    pub fn insert<W: AsRef<[u8]>>(&mut self, word: W) -> bool {
        let word = word.as_ref();
        if word.is_empty() || !word.iter().all(u8::is_ascii_alphabetic) {
            return false;
        }

        let mut node = &mut self.head;
        for &letter in word {
            node = match node.find_or_insert_child(letter, true) {
                Some(child) => child,
                None => return false,
            };
        }
        let added = !node.terminated;
        node.terminated = true;
        if added {
            self.count += 1;
        }
        added
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.head.children.is_empty()
    }

    /// Create an iterator over the entries in lexicographic order.
    pub fn iter(&self) -> Entries<'_> {
        self.into_iter()
    }

    /// Classify a scanned word and update the counters it affects.
    ///
    /// The word is only counted if every one of its letters matches a
    /// node. When it does:
    ///  - each entry passed before the last letter gains a superword
    ///  - the final node, if it is an entry, gains an occurrence
    ///  - every entry below the final node gains a prefix
    pub fn process<W: AsRef<[u8]>>(&mut self, word: W) -> Classification {
        let path = match self.path(word.as_ref()) {
            Some(path) if !path.is_empty() => path,
            _ => return Classification::Unmatched,
        };

        let last = path.len() - 1;
        let mut occurrence = false;
        let mut superwords = 0;
        let mut node = &mut self.head;
        for (depth, &idx) in path.iter().enumerate() {
            node = &mut node.children[idx];
            if node.terminated {
                if depth == last {
                    node.counts.occurrences += 1;
                    occurrence = true;
                } else {
                    node.counts.superwords += 1;
                    superwords += 1;
                }
            }
        }
        let prefixes = node.propagate_prefixes();

        Classification::Matched {
            occurrence,
            superwords,
            prefixes,
        }
    }

    fn find(&self, word: &[u8]) -> Option<&Node> {
        word.iter().try_fold(&self.head, |node, &letter| {
            node.find_child(letter).map(|idx| &node.children[idx])
        })
    }

    // Child indices from the head to the word's final node, if every
    // letter matches.
    fn path(&self, word: &[u8]) -> Option<Vec<usize>> {
        let mut node = &self.head;
        let mut path = Vec::with_capacity(word.len());
        for &letter in word {
            let idx = node.find_child(letter)?;
            path.push(idx);
            node = &node.children[idx];
        }
        Some(path)
    }
}
