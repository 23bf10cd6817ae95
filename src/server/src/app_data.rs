use std::sync::Arc;

use liblinkpager::store::EntryStore;

use crate::templates::Templates;

#[derive(Debug, Clone)]
pub struct LinkPagerAppData {
    pub store: Arc<EntryStore>,
    pub templates: Arc<Templates>,
}

impl LinkPagerAppData {
    pub fn new(store: Arc<EntryStore>, templates: Templates) -> LinkPagerAppData {
        LinkPagerAppData {
            store,
            templates: Arc::new(templates),
        }
    }
}
