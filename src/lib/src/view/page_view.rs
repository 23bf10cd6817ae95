use serde::{Deserialize, Serialize};

use crate::model::Entry;
use crate::store::EntryStore;

/// Everything needed to render one page of entries
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Entry>,
    pub page: i64,
    pub has_next: bool,
    pub next_page: i64,
    pub has_prev: bool,
    pub prev_page: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    Found(PageView),
    NotFound,
}

impl PageView {
    pub fn new(items: Vec<Entry>, page: i64, page_size: usize) -> PageView {
        // A full page is taken to mean there is another one after it. That is
        // wrong when the total is an exact multiple of the page size, the
        // following page then comes back NotFound.
        let has_next = items.len() == page_size;
        PageView {
            items,
            page,
            has_next,
            next_page: page.saturating_add(1),
            has_prev: page > 0,
            prev_page: page.saturating_sub(1),
        }
    }
}

/// Build the view for page `index`, or NotFound if the store has nothing there
pub fn build_page(store: &EntryStore, index: i64) -> PageLookup {
    let items = store.page(index);
    if items.is_empty() {
        log::debug!("build_page {} is empty", index);
        return PageLookup::NotFound;
    }
    PageLookup::Found(PageView::new(items, index, store.page_size()))
}
