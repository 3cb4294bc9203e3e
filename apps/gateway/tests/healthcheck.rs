mod common;
mod support;

use actix_web::test;
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_health_endpoint_reports_ok() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state("http://backend.internal:8080/zenith-financial")?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream"], "http://backend.internal:8080/zenith-financial");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[actix_web::test]
async fn test_health_carries_request_id_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state("http://127.0.0.1:1")?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().get("x-request-id").is_some());

    Ok(())
}
