//! Html templates for the link pages.
//!
//! Templates are plain html files read once at startup. `index.html` may use
//! the placeholders `{{ items }}`, `{{ page }}`, `{{ prev }}` and `{{ next }}`.
//! Every value that comes from the link file is escaped before it is inserted.
//!

use std::fmt::Write;
use std::path::Path;

use liblinkpager::constants::{INDEX_TEMPLATE, NOT_FOUND_TEMPLATE};
use liblinkpager::error::LinkPagerError;
use liblinkpager::util;
use liblinkpager::util::html::escape;
use liblinkpager::view::PageView;

const ITEMS: &str = "{{ items }}";
const PAGE: &str = "{{ page }}";
const PREV: &str = "{{ prev }}";
const NEXT: &str = "{{ next }}";

#[derive(Debug, Clone)]
pub struct Templates {
    index: String,
    not_found: String,
}

impl Templates {
    pub fn load(dir: &Path) -> Result<Templates, LinkPagerError> {
        log::debug!("Loading templates from {:?}", dir);
        let index = util::fs::read_from_path(&dir.join(INDEX_TEMPLATE))?;
        let not_found = util::fs::read_from_path(&dir.join(NOT_FOUND_TEMPLATE))?;
        Ok(Templates::new(index, not_found))
    }

    pub fn new(index: impl Into<String>, not_found: impl Into<String>) -> Templates {
        Templates {
            index: index.into(),
            not_found: not_found.into(),
        }
    }

    pub fn render_index(&self, view: &PageView) -> String {
        let prev = if view.has_prev {
            format!(r#"<a class="prev" href="/?page={}">Previous</a>"#, view.prev_page)
        } else {
            String::new()
        };
        let next = if view.has_next {
            format!(r#"<a class="next" href="/?page={}">Next</a>"#, view.next_page)
        } else {
            String::new()
        };

        // Items go in last so text from the file is never scanned for placeholders
        self.index
            .replace(PAGE, &view.page.to_string())
            .replace(PREV, &prev)
            .replace(NEXT, &next)
            .replace(ITEMS, &render_items(view))
    }

    pub fn render_not_found(&self) -> &str {
        &self.not_found
    }
}

/// Only web links become clickable, anything else (`javascript:` and friends) is shown as text
fn is_linkable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn render_items(view: &PageView) -> String {
    let mut items = String::new();
    for entry in &view.items {
        let url = escape(&entry.url);
        let link = if is_linkable(&entry.url) {
            format!(r#"<a href="{url}">{url}</a>"#)
        } else {
            format!(r#"<span class="url">{url}</span>"#)
        };
        // Writing to a String cannot fail
        let _ = writeln!(
            items,
            r#"<li>{link} <span class="owner">{}</span></li>"#,
            escape(&entry.owner)
        );
    }
    items
}
