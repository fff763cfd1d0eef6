//! Splits a byte stream into words.
//!
//! A word is a maximal run of ASCII letters. Every other byte is a
//! separator and is discarded. Words are folded to lowercase.
//!
//! ```
//! use wordtally::words::{WordOptions, Words};
//!
//! let text = "The cat's 3 catalogs--";
//! let words: Vec<String> = Words::new(text.as_bytes(), WordOptions::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(words, vec!["the", "cat", "s", "catalogs"]);
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// The longest run of letters accepted by default.
pub const MAX_WORD_LEN: usize = 127;

/// What to do with a run of letters longer than the limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Oversized {
    /// Fail with [`Error::WordTooLong`].
    #[default]
    Reject,
    /// Keep the leading letters up to the limit, drop the rest of the run.
    Truncate,
}

/// How a word source treats long runs of letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordOptions {
    /// Longest run of letters kept as a word. Values below 1 are read as 1.
    pub max_len: usize,
    /// What to do with runs longer than `max_len`.
    pub oversized: Oversized,
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            max_len: MAX_WORD_LEN,
            oversized: Oversized::default(),
        }
    }
}

/// Lazy iterator over the words of a reader.
///
/// The reader is read a byte at a time, so wrap unbuffered sources in a
/// [`BufReader`].
#[derive(Debug)]
pub struct Words<R> {
    bytes: io::Bytes<R>,
    options: WordOptions,
    line: usize,
    done: bool,
}

impl<R: Read> Words<R> {
    /// Split `reader` into words. Every word holds at least one letter.
    pub fn new(reader: R, options: WordOptions) -> Self {
        Self {
            bytes: reader.bytes(),
            options: WordOptions {
                max_len: options.max_len.max(1),
                ..options
            },
            line: 1,
            done: false,
        }
    }
}

/// Open a file as a word source.
pub fn open<P: AsRef<Path>>(path: P, options: WordOptions) -> Result<Words<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Words::new(BufReader::new(file), options))
}

impl<R: Read> Iterator for Words<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut word = String::new();
        let mut length = 0;
        let mut line = self.line;
        loop {
            match self.bytes.next() {
                Some(Ok(byte)) if byte.is_ascii_alphabetic() => {
                    if length == 0 {
                        line = self.line;
                    }
                    if length < self.options.max_len {
                        word.push(char::from(byte.to_ascii_lowercase()));
                    }
                    length += 1;
                }
                Some(Ok(byte)) => {
                    if byte == b'\n' {
                        self.line += 1;
                    }
                    if length > 0 {
                        break;
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    if length == 0 {
                        return None;
                    }
                    break;
                }
            }
        }

        if length > self.options.max_len && self.options.oversized == Oversized::Reject {
            return Some(Err(Error::WordTooLong {
                length,
                limit: self.options.max_len,
                line,
            }));
        }
        Some(Ok(word))
    }
}
