use crate::constants::WATCH_EVENT_BUFFER;
use crate::error::LinkPagerError;
use crate::store::EntryStore;
use log::{debug, error, info, trace, warn};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

#[path = "watcher_test.rs"]
mod watcher_test;

/// Watches a single file and reports every change made to it.
///
/// The parent directory is watched rather than the file itself so the watch
/// survives the file being replaced by a rename or deleted and recreated.
pub struct FileWatcher {
    path: PathBuf,
    event_rx: mpsc::Receiver<Event>,
    // Owns the sending half of the channel, dropping it ends the watch
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Establish the watch. Fails if the file does not exist or the OS refuses
    /// the watch, nothing is spawned in that case.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LinkPagerError> {
        let path = std::fs::canonicalize(path.as_ref())
            .map_err(|err| LinkPagerError::source_unreadable(path.as_ref(), err))?;
        let dir = path
            .parent()
            .ok_or_else(|| LinkPagerError::invalid_config(format!("{:?} has no parent", path)))?
            .to_path_buf();

        let (event_tx, event_rx) = mpsc::channel::<Event>(WATCH_EVENT_BUFFER);

        // Events arrive on the notify backend thread
        let mut watcher =
            notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    // Only fails once the receiver is gone
                    let _ = event_tx.blocking_send(event);
                }
                Err(e) => error!("Filesystem watch error: {}", e),
            })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        info!("Watching file: {}", path.display());

        Ok(Self {
            path,
            event_rx,
            _watcher: watcher,
        })
    }

    /// The canonical path being watched
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wait for the next change to the watched file
    pub async fn next_change(&mut self) -> Option<Event> {
        while let Some(event) = self.event_rx.recv().await {
            trace!("Received event: {:?}", event);
            if is_change_to(&event, &self.path) {
                return Some(event);
            }
        }
        None
    }

    /// Call `on_change` once for each change to the file until the watch ends
    pub async fn watch<F>(mut self, mut on_change: F)
    where
        F: FnMut(&Event),
    {
        while let Some(event) = self.next_change().await {
            on_change(&event);
        }
        warn!("Watch on {} terminated", self.path.display());
    }

    /// Reload `store` on every change. A failed reload is logged and the
    /// previous entries are kept, the watch carries on either way.
    pub async fn watch_store(mut self, store: Arc<EntryStore>) {
        while let Some(event) = self.next_change().await {
            debug!("{} changed: {:?}", self.path.display(), event.kind);

            let store = store.clone();
            match tokio::task::spawn_blocking(move || store.reload()).await {
                Ok(Ok(count)) => debug!("Reload published {} entries", count),
                Ok(Err(err)) => error!("Error while reloading the file: {}", err),
                Err(err) => error!("Reload task failed: {}", err),
            }
        }
        warn!("Watch on {} terminated", self.path.display());
    }
}

/// Whether `event` changes the file at `path`
pub fn is_change_to(event: &Event, path: &Path) -> bool {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {
            event.paths.iter().any(|p| p == path)
        }
        // Reads of the file, including our own reloads
        EventKind::Any | EventKind::Access(_) | EventKind::Other => false,
    }
}
