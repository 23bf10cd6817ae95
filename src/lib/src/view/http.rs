pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

pub const MSG_RESOURCE_FOUND: &str = "resource_found";
pub const MSG_RESOURCE_NOT_FOUND: &str = "resource_not_found";
pub const MSG_BAD_REQUEST: &str = "bad_request";
