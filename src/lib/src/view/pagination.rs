use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    pub page_number: i64,
    pub total_pages: usize,
    pub total_entries: usize,
}
