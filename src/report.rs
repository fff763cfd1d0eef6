//! Writes the tally of every dictionary entry.

use std::io::{self, Write};

use crate::trie::Trie;

/// Write one `<word> <occurrences> <prefixes> <superwords>` line per
/// entry, in lexicographic order. Returns the number of lines written.
pub fn write_report<W: Write>(trie: &Trie, mut writer: W) -> io::Result<usize> {
    let mut lines = 0;
    for entry in trie {
        writeln!(writer, "{entry}")?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}
