use serde::{Deserialize, Serialize};
use std::fmt;

/// One `URL OWNER` line of the source file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub url: String,
    pub owner: String,
}

impl Entry {
    pub fn new(url: impl AsRef<str>, owner: impl AsRef<str>) -> Entry {
        Entry {
            url: url.as_ref().to_string(),
            owner: owner.as_ref().to_string(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.owner)
    }
}
