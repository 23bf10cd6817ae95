use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};
use liblinkpager::view::{StatusMessage, StatusMessageDescription};
use std::num::ParseIntError;

#[derive(Debug, Display, Error)]
pub enum LinkPagerHttpError {
    NotFound,
    AppDataDoesNotExist,
    InvalidPageParam(ParseIntError),
}

impl From<ParseIntError> for LinkPagerHttpError {
    fn from(error: ParseIntError) -> Self {
        LinkPagerHttpError::InvalidPageParam(error)
    }
}

impl error::ResponseError for LinkPagerHttpError {
    fn error_response(&self) -> HttpResponse {
        match self {
            LinkPagerHttpError::NotFound => {
                HttpResponse::NotFound().json(StatusMessage::resource_not_found())
            }
            LinkPagerHttpError::AppDataDoesNotExist => {
                log::error!("AppData does not exist");
                HttpResponse::BadRequest().json(StatusMessage::bad_request())
            }
            LinkPagerHttpError::InvalidPageParam(err) => HttpResponse::BadRequest().json(
                StatusMessageDescription::bad_request(format!("Invalid page: {err}")),
            ),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LinkPagerHttpError::NotFound => StatusCode::NOT_FOUND,
            LinkPagerHttpError::AppDataDoesNotExist => StatusCode::BAD_REQUEST,
            LinkPagerHttpError::InvalidPageParam(_) => StatusCode::BAD_REQUEST,
        }
    }
}
