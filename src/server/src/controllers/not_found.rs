use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use liblinkpager::view::StatusMessage;

use crate::errors::LinkPagerHttpError;
use crate::params::app_data;

/// Html page the index redirects to when a page is empty
pub async fn page(req: HttpRequest) -> actix_web::Result<HttpResponse, LinkPagerHttpError> {
    let app_data = app_data(&req)?;
    Ok(HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(app_data.templates.render_not_found().to_string()))
}

/// Fallback for any route that does not exist
pub async fn index(_req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(StatusMessage::resource_not_found())
}
