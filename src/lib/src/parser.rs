//! Parses the raw contents of a link file into entries.
//!
//! Every line must hold exactly two whitespace separated tokens, `URL OWNER`.
//! Anything else is counted as skipped and dropped, it never fails the load.
//! The returned list is reversed so the last line of the file comes first.
//!

use crate::model::Entry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEntries {
    pub entries: Vec<Entry>,
    pub skipped: usize,
}

/// Parse text into entries, newest (last line) first.
pub fn parse(raw: &str) -> ParsedEntries {
    let mut entries: Vec<Entry> = Vec::new();
    let mut skipped = 0;

    for line in raw.lines() {
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    entries.reverse();

    ParsedEntries { entries, skipped }
}

/// Parse raw bytes, decoding invalid utf8 lossily so one bad byte only costs its own line
pub fn parse_bytes(raw: &[u8]) -> ParsedEntries {
    parse(&String::from_utf8_lossy(raw))
}

/// A single `URL OWNER` line, or None if it has any other number of tokens
pub fn parse_line(line: &str) -> Option<Entry> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(url), Some(owner), None) => Some(Entry::new(url, owner)),
        _ => None,
    }
}
