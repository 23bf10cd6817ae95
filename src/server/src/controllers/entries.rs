use actix_web::{web, HttpRequest, HttpResponse};
use liblinkpager::view::PaginatedEntries;

use crate::errors::LinkPagerHttpError;
use crate::params::{app_data, PageNumQuery};

/// One page of entries as json, `GET /api/entries?page=N`
pub async fn index(
    req: HttpRequest,
    query: web::Query<PageNumQuery>,
) -> actix_web::Result<HttpResponse, LinkPagerHttpError> {
    let app_data = app_data(&req)?;
    let page = query.page_strict()?;

    let (entries, pagination) = app_data.store.paginate(page);
    if entries.is_empty() {
        return Err(LinkPagerHttpError::NotFound);
    }

    Ok(HttpResponse::Ok().json(PaginatedEntries::success(entries, pagination)))
}
