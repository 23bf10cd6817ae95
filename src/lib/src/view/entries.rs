use serde::{Deserialize, Serialize};

use crate::model::Entry;
use crate::view::http::{MSG_RESOURCE_FOUND, STATUS_SUCCESS};
use crate::view::Pagination;

#[derive(Deserialize, Serialize, Debug)]
pub struct PaginatedEntries {
    pub status: String,
    pub status_message: String,
    pub entries: Vec<Entry>,
    pub pagination: Pagination,
}

impl PaginatedEntries {
    pub fn success(entries: Vec<Entry>, pagination: Pagination) -> PaginatedEntries {
        PaginatedEntries {
            status: STATUS_SUCCESS.to_string(),
            status_message: MSG_RESOURCE_FOUND.to_string(),
            entries,
            pagination,
        }
    }
}
