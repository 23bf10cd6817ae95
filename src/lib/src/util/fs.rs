use std::path::Path;

use crate::error::LinkPagerError;

pub fn read_from_path(path: &Path) -> Result<String, LinkPagerError> {
    if !path.is_file() {
        return Err(LinkPagerError::template_not_found(path));
    }
    std::fs::read_to_string(path).map_err(|err| LinkPagerError::source_unreadable(path, err))
}
