//! 🔗 liblinkpager
//!
//! A live-reloading, paginated list of links backed by a flat text file.
//!
//! The source file holds one `URL OWNER` pair per line. The store keeps the
//! parsed list in memory, newest (last line) first, and swaps in a fresh copy
//! every time the file watcher sees the file change.
//!
//! # Examples
//!
//! Load a store and read the first page:
//!
//! ```
//! use liblinkpager::store::EntryStore;
//! use liblinkpager::view::page_view::{self, PageLookup};
//!
//! let store = EntryStore::load("links.txt", 10)?;
//! match page_view::build_page(&store, 0) {
//!     PageLookup::Found(view) => println!("{} links", view.items.len()),
//!     PageLookup::NotFound => println!("nothing to show"),
//! }
//! ```
//!
//! Keep the store fresh from a background task:
//!
//! ```
//! use std::sync::Arc;
//! use liblinkpager::store::EntryStore;
//! use liblinkpager::watcher::FileWatcher;
//!
//! let store = Arc::new(EntryStore::load("links.txt", 10)?);
//! let watcher = FileWatcher::new(store.source())?;
//! tokio::spawn(watcher.watch_store(store.clone()));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
pub mod util;
pub mod view;
pub mod watcher;
