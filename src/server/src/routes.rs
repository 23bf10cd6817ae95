use actix_web::web;
use liblinkpager::constants::NOT_FOUND_ROUTE;

use crate::controllers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controllers::pages::index))
        .route(NOT_FOUND_ROUTE, web::get().to(controllers::not_found::page))
        .service(
            web::scope("/api")
                .route("/entries", web::get().to(controllers::entries::index))
                .route("/health", web::get().to(controllers::health::index)),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{web, App};
    use liblinkpager::error::LinkPagerError;
    use tempfile::TempDir;

    use crate::controllers;
    use crate::routes;
    use crate::test;

    #[actix_web::test]
    async fn test_routes_follow_redirect_to_not_found_page() -> Result<(), LinkPagerError> {
        let dir = TempDir::new()?;
        let app_data = test::numbered_app_data(dir.path(), 3, 10)?;

        let app = actix_web::test::init_service(
            App::new()
                .app_data(app_data)
                .configure(routes::config)
                .default_service(web::route().to(controllers::not_found::index)),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/?page=9")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        let req = actix_web::test::TestRequest::get().uri("/404").to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = actix_http::body::to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(bytes, test::TEST_NOT_FOUND_TEMPLATE.as_bytes());

        let req = actix_web::test::TestRequest::get()
            .uri("/no/such/route")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = actix_web::test::TestRequest::get()
            .uri("/api/health")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        Ok(())
    }
}
