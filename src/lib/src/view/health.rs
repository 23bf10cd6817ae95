use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Snapshot;
use crate::view::http::{MSG_RESOURCE_FOUND, STATUS_SUCCESS};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub status_message: String,
    pub total_entries: usize,
    pub skipped_lines: usize,
    pub loaded_at: DateTime<Utc>,
}

impl HealthResponse {
    pub fn from_snapshot(snapshot: &Snapshot) -> HealthResponse {
        HealthResponse {
            status: STATUS_SUCCESS.to_string(),
            status_message: MSG_RESOURCE_FOUND.to_string(),
            total_entries: snapshot.len(),
            skipped_lines: snapshot.skipped,
            loaded_at: snapshot.loaded_at,
        }
    }
}
