use std::path::Path;
use std::sync::Arc;

use liblinkpager::error::LinkPagerError;
use liblinkpager::store::EntryStore;
use liblinkpager::test;

use crate::app_data::LinkPagerAppData;
use crate::templates::Templates;

pub const TEST_INDEX_TEMPLATE: &str =
    "<html><body><h1>Page {{ page }}</h1><ul>\n{{ items }}</ul>{{ prev }} {{ next }}</body></html>";
pub const TEST_NOT_FOUND_TEMPLATE: &str = "<html><body>Nothing here</body></html>";

/// App data over a store of `n` numbered entries written into `dir`
pub fn numbered_app_data(
    dir: &Path,
    n: usize,
    page_size: usize,
) -> Result<LinkPagerAppData, LinkPagerError> {
    test::init_test_env();
    let path = test::write_numbered_entries_file(dir, n)?;
    app_data_for(&path, page_size)
}

pub fn app_data_for(path: &Path, page_size: usize) -> Result<LinkPagerAppData, LinkPagerError> {
    let store = Arc::new(EntryStore::load(path, page_size)?);
    let templates = Templates::new(TEST_INDEX_TEMPLATE, TEST_NOT_FOUND_TEMPLATE);
    Ok(LinkPagerAppData::new(store, templates))
}
