//! In-memory store for the parsed link file.
//!
//! The store holds exactly one [`Snapshot`] behind a lock. A reload reads and
//! parses the file without holding the lock and then swaps the new snapshot in
//! with a single pointer write, so readers see either the old list or the new
//! one and never a mix of the two.
//!

use parking_lot::RwLock;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::LinkPagerError;
use crate::model::{Entry, Snapshot};
use crate::parser;
use crate::view::Pagination;

#[derive(Debug)]
pub struct EntryStore {
    source: PathBuf,
    page_size: usize,
    current: RwLock<Arc<Snapshot>>,
}

impl EntryStore {
    /// Create a store and perform the initial load. There is no empty state,
    /// if the file cannot be read the store is never built.
    pub fn load(source: impl AsRef<Path>, page_size: usize) -> Result<EntryStore, LinkPagerError> {
        if page_size == 0 {
            return Err(LinkPagerError::invalid_config("page size must be positive"));
        }

        let source = source.as_ref().to_path_buf();
        let snapshot = read_snapshot(&source)?;
        log_loaded(&source, &snapshot);

        Ok(EntryStore {
            source,
            page_size,
            current: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// Re-read the source file and publish the result. On error the previous
    /// entries stay in place.
    pub fn reload(&self) -> Result<usize, LinkPagerError> {
        let snapshot = read_snapshot(&self.source)?;
        log_loaded(&self.source, &snapshot);

        let count = snapshot.len();
        *self.current.write() = Arc::new(snapshot);
        Ok(count)
    }

    /// The entries on the zero based page `index`, empty when there is no such page
    pub fn page(&self, index: i64) -> Vec<Entry> {
        page_of(&self.snapshot(), index, self.page_size)
    }

    /// The page along with totals, both taken from the same snapshot
    pub fn paginate(&self, index: i64) -> (Vec<Entry>, Pagination) {
        let snapshot = self.snapshot();
        let entries = page_of(&snapshot, index, self.page_size);
        let total_entries = snapshot.len();
        let pagination = Pagination {
            page_size: self.page_size,
            page_number: index,
            total_pages: total_entries.div_ceil(self.page_size),
            total_entries,
        };
        (entries, pagination)
    }

    /// A handle to the current snapshot. It stays valid across later reloads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// `[from, to)` of the page within a list of `len` entries, or None if the page is empty
pub fn page_bounds(index: i64, page_size: usize, len: usize) -> Option<(usize, usize)> {
    if index < 0 {
        return None;
    }
    let from = usize::try_from(index).ok()?.checked_mul(page_size)?;
    let to = from.saturating_add(page_size).min(len);
    if from >= len || to <= from {
        return None;
    }
    Some((from, to))
}

fn page_of(snapshot: &Snapshot, index: i64, page_size: usize) -> Vec<Entry> {
    match page_bounds(index, page_size, snapshot.len()) {
        Some((from, to)) => snapshot.entries[from..to].to_vec(),
        None => vec![],
    }
}

fn read_snapshot(source: &Path) -> Result<Snapshot, LinkPagerError> {
    // The handle is dropped at the end of this scope on every path
    let mut file =
        File::open(source).map_err(|err| LinkPagerError::source_unreadable(source, err))?;
    let mut raw: Vec<u8> = Vec::new();
    file.read_to_end(&mut raw)
        .map_err(|err| LinkPagerError::source_unreadable(source, err))?;

    Ok(Snapshot::from(parser::parse_bytes(&raw)))
}

fn log_loaded(source: &Path, snapshot: &Snapshot) {
    log::info!(
        "Loaded {} entries from {:?}, skipped {} bad lines",
        snapshot.len(),
        source,
        snapshot.skipped
    );
}
