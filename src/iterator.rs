//! Provides Trie iterators.
//!
use std::fmt;

use crate::trie::{Counts, Node, Trie};

/// Iterator Item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub counts: Counts,
}

/// Formats as `<word> <occurrences> <prefixes> <superwords>`.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.word, self.counts.occurrences, self.counts.prefixes, self.counts.superwords
        )
    }
}

// A node on the current path and the index of its next unvisited child.
#[derive(Debug)]
struct NodeRef<'a>(&'a Node, usize);

/// Depth first iterator over the entries of a Trie. Entries are produced
/// in lexicographic order of their words.
#[derive(Debug)]
pub struct Entries<'a> {
    nodes: Vec<NodeRef<'a>>,
    key: Vec<u8>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend into the next unvisited child of the deepest node, or
        // backtrack once a node has no children left. Invariant: key holds
        // one letter per node on the path below the head.
        loop {
            let top = self.nodes.last_mut()?;
            let node: &'a Node = top.0;
            match node.children.get(top.1) {
                Some(child) => {
                    top.1 += 1;
                    self.key.push(child.key);
                    self.nodes.push(NodeRef(child, 0));
                    if child.terminated {
                        return Some(Entry {
                            word: self.key.iter().map(|&b| char::from(b)).collect(),
                            counts: child.counts,
                        });
                    }
                }
                None => {
                    self.nodes.pop();
                    self.key.pop();
                }
            }
        }
    }
}

// Iterator
impl<'a> IntoIterator for &'a Trie {
    type Item = Entry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Entries {
            nodes: vec![NodeRef(&self.head, 0)],
            key: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};

    #[test]
    fn it_iterates_over_empty_trie() {
        let trie = Trie::new();
        assert_eq!(trie.iter().count(), 0);
    }

    #[test]
    fn it_iterates_over_populated_trie() {
        let mut trie = Trie::new();
        for w in ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd"] {
            trie.insert(w);
        }
        let words: Vec<String> = trie.iter().map(|e| e.word).collect();
        assert_eq!(
            words,
            vec!["abcdef", "abcdefg", "abd", "abdd", "ez", "z", "ze"]
        );
    }

    #[test]
    fn it_skips_interior_nodes() {
        let mut trie = Trie::new();
        trie.insert("abc");
        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.iter().map(|e| e.word).join(","), "abc");
    }

    #[test]
    fn it_can_iter_sorted() {
        let input = vec![
            "lexicographic",
            "sorting",
            "of",
            "a",
            "set",
            "of",
            "keys",
            "can",
            "be",
            "accomplished",
            "with",
            "a",
            "simple",
            "trie",
            "based",
            "algorithm",
            "we",
            "insert",
            "all",
            "keys",
            "in",
            "a",
            "trie",
            "output",
            "all",
            "keys",
            "in",
            "the",
            "trie",
            "by",
            "means",
            "of",
            "preorder",
            "traversal",
        ];
        let mut trie = Trie::new();
        for entry in &input {
            trie.insert(entry);
        }
        let expected: Vec<&str> = input.into_iter().sorted().dedup().collect();
        let sorted_words: Vec<String> = trie.iter().map(|x| x.word).collect();
        assert_eq!(sorted_words, expected);
    }

    #[test]
    fn it_finds_every_inserted_word_in_order() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut trie = Trie::new();
        let mut searches: Vec<String> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .map(char::from)
                .filter(char::is_ascii_alphabetic)
                .take(thread_rng().gen_range(1..=SIZE))
                .collect();
            trie.insert(&entry);
            searches.push(entry.to_ascii_lowercase());
        }
        searches.sort();
        searches.dedup();
        let words: Vec<String> = trie.iter().map(|x| x.word).collect();
        assert_eq!(words, searches);
    }

    #[test]
    fn it_formats_entries_as_report_lines() {
        let entry = Entry {
            word: "catalog".to_string(),
            counts: Counts {
                occurrences: 1,
                prefixes: 2,
                superwords: 3,
            },
        };
        assert_eq!(entry.to_string(), "catalog 1 2 3");
    }
}
