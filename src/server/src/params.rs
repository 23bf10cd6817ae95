use actix_web::HttpRequest;

use crate::app_data::LinkPagerAppData;
use crate::errors::LinkPagerHttpError;

pub mod page_num_query;
pub use page_num_query::PageNumQuery;

pub fn app_data(req: &HttpRequest) -> Result<&LinkPagerAppData, LinkPagerHttpError> {
    req.app_data::<LinkPagerAppData>()
        .ok_or(LinkPagerHttpError::AppDataDoesNotExist)
}
