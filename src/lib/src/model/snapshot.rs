use chrono::{DateTime, Utc};

use crate::model::Entry;
use crate::parser::ParsedEntries;

/// The immutable result of one successful load. The store swaps whole
/// snapshots and never edits one in place.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Newest first, i.e. the reverse of file order
    pub entries: Vec<Entry>,
    pub skipped: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(entries: Vec<Entry>, skipped: usize) -> Snapshot {
        Snapshot {
            entries,
            skipped,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<ParsedEntries> for Snapshot {
    fn from(parsed: ParsedEntries) -> Snapshot {
        Snapshot::new(parsed.entries, parsed.skipped)
    }
}
