//! Tallies how the words of a text relate to the words of a dictionary.
//!
//! The dictionary is stored in a [`crate::trie::Trie`] of ASCII letters.
//! Each word scanned from the text is classified against it, and every
//! dictionary word accumulates three counters:
//!  - occurrences: the scanned word was exactly the dictionary word
//!  - prefixes: the scanned word was a strict leading prefix of it
//!  - superwords: the scanned word strictly extended it
//!
//! A run proceeds in three phases:
//!  - build the Trie from a dictionary: [`crate::dictionary`]
//!  - scan a text against it: [`crate::scan`]
//!  - report the counters: [`crate::report`]
//!
//! Both inputs are split into words by [`crate::words::Words`].
//!
//! Example:
//! ```
//! use wordtally::{dictionary, report, scan, words::WordOptions, Trie};
//!
//! let mut trie = Trie::new();
//! dictionary::build(&mut trie, "cat catalog".as_bytes(), WordOptions::default()).unwrap();
//! scan::scan(&mut trie, "cat catalog dog cats".as_bytes(), WordOptions::default()).unwrap();
//!
//! let mut out = vec![];
//! report::write_report(&trie, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "cat 1 0 1\ncatalog 1 1 0\n");
//! ```

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod dictionary;
pub mod error;
pub mod iterator;
pub mod report;
pub mod scan;
pub mod trie;
pub mod words;

pub use error::{Error, Result};
pub use trie::Trie;
