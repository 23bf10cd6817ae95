pub mod entries;
pub mod health;
pub mod http;
pub mod page_view;
pub mod pagination;
pub mod status_message;

pub use crate::view::entries::PaginatedEntries;
pub use crate::view::health::HealthResponse;
pub use crate::view::page_view::{PageLookup, PageView};
pub use crate::view::pagination::Pagination;
pub use crate::view::status_message::{StatusMessage, StatusMessageDescription};
