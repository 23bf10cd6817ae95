pub mod entry;
pub mod snapshot;

pub use crate::model::entry::Entry;
pub use crate::model::snapshot::Snapshot;
