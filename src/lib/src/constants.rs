//! Constants used throughout the linkpager codebase
//!

/// Default number of entries rendered per page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default address the server binds to
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3032";
/// Default directory to load html templates from
pub const DEFAULT_TEMPLATE_DIR: &str = "templates/";

/// Template rendered for a page of entries
pub const INDEX_TEMPLATE: &str = "index.html";
/// Template rendered for the not found route
pub const NOT_FOUND_TEMPLATE: &str = "404.html";

/// Route the index redirects to when a page has no entries
pub const NOT_FOUND_ROUTE: &str = "/404";

/// Capacity of the channel between the notify backend and the watch loop
pub const WATCH_EVENT_BUFFER: usize = 1000;
