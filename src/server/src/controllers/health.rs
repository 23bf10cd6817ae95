use crate::errors::LinkPagerHttpError;
use crate::params::app_data;
use actix_web::{HttpRequest, HttpResponse};
use liblinkpager::view::HealthResponse;

pub async fn index(req: HttpRequest) -> actix_web::Result<HttpResponse, LinkPagerHttpError> {
    let app_data = app_data(&req)?;
    let snapshot = app_data.store.snapshot();
    Ok(HttpResponse::Ok().json(HealthResponse::from_snapshot(&snapshot)))
}
