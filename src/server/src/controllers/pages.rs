use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use liblinkpager::constants::NOT_FOUND_ROUTE;
use liblinkpager::view::page_view::{self, PageLookup};

use crate::errors::LinkPagerHttpError;
use crate::params::{app_data, PageNumQuery};

/// Render one page of links, `GET /?page=N`
///
/// Any query string is accepted; a bad or repeated `page` never rejects the request.
pub async fn index(req: HttpRequest) -> actix_web::Result<HttpResponse, LinkPagerHttpError> {
    let app_data = app_data(&req)?;
    let page = PageNumQuery::first_from(req.query_string()).page_or_default();

    match page_view::build_page(&app_data.store, page) {
        PageLookup::Found(view) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(app_data.templates.render_index(&view))),
        PageLookup::NotFound => Ok(HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, NOT_FOUND_ROUTE))
            .finish()),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{web, App};
    use liblinkpager::error::LinkPagerError;
    use tempfile::TempDir;

    use crate::app_data::LinkPagerAppData;
    use crate::controllers;
    use crate::test;

    async fn get(app_data: LinkPagerAppData, uri: &str) -> (StatusCode, Option<String>, String) {
        let app = actix_web::test::init_service(
            App::new()
                .app_data(app_data)
                .route("/", web::get().to(controllers::pages::index)),
        )
        .await;

        let req = actix_web::test::TestRequest::get().uri(uri).to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let bytes = actix_http::body::to_bytes(resp.into_body()).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        (status, location, body)
    }

    #[actix_web::test]
    async fn test_index_renders_newest_first() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("links.txt");
        std::fs::write(&path, "http://a 1\nhttp://b 2\nhttp://c 3")?;
        let app_data = test::app_data_for(&path, 2)?;

        let (status, _, body) = get(app_data, "/").await;
        assert_eq!(status, StatusCode::OK);

        let c = body.find("http://c").unwrap();
        let b = body.find("http://b").unwrap();
        assert!(c < b);
        assert!(!body.contains("http://a"));
        assert!(body.contains("<h1>Page 0</h1>"));
        assert!(body.contains(r#"href="/?page=1">Next"#));
        assert!(!body.contains("Previous"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_index_second_page() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("links.txt");
        std::fs::write(&path, "http://a 1\nhttp://b 2\nhttp://c 3")?;
        let app_data = test::app_data_for(&path, 2)?;

        let (status, _, body) = get(app_data, "/?page=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("http://a"));
        assert!(body.contains(r#"href="/?page=0">Previous"#));
        assert!(!body.contains("Next"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_index_out_of_range_redirects() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let app_data = test::numbered_app_data(dir.path(), 25, 10)?;

        let (status, location, _) = get(app_data.clone(), "/?page=3").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/404"));

        let (status, location, _) = get(app_data, "/?page=-1").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/404"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_index_bad_page_is_first_page() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let app_data = test::numbered_app_data(dir.path(), 25, 10)?;

        let (status, _, body) = get(app_data, "/?page=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Page 0</h1>"));
        assert!(body.contains("http://example.com/24.png"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_index_repeated_or_bare_page_param() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let app_data = test::numbered_app_data(dir.path(), 25, 10)?;

        let (status, _, body) = get(app_data.clone(), "/?page=1&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Page 1</h1>"));
        assert!(body.contains("http://example.com/14.png"));

        let (status, _, body) = get(app_data, "/?page").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Page 0</h1>"));
        Ok(())
    }

    #[actix_web::test]
    async fn test_index_exact_multiple_links_to_missing_page() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let app_data = test::numbered_app_data(dir.path(), 20, 10)?;

        let (status, _, body) = get(app_data.clone(), "/?page=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/?page=2">Next"#));

        let (status, _, _) = get(app_data, "/?page=2").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        Ok(())
    }
}
