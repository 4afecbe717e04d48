// Contract tests for the /api/orders endpoints
//
// Orders mirror the tutorial routes except there is no collection-wide
// DELETE. Delete by id is wired through to the store.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use serde_json::json;

use catalog_api::modules::orders::controllers::order_controller;
use catalog_api::modules::orders::{Order, OrderRepository, OrderService};
use helpers::memory::InMemoryOrderRepository;

async fn spawn_app(
    repo: Arc<InMemoryOrderRepository>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(OrderService::new(repo)))
            .service(web::scope("/api").configure(order_controller::configure)),
    )
    .await
}

#[actix_web::test]
async fn post_creates_unpublished_order() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({
            "title": "Store Orders",
            "description": "Bulk store orders are placed every week",
            "published": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Order = test::read_body_json(resp).await;
    assert_eq!(created.id, 1);
    assert!(!created.published);
}

#[actix_web::test]
async fn get_unknown_id_returns_404() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::get().uri("/api/orders/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_returns_204_when_empty() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/orders?title=Store")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn list_with_title_filter_returns_only_matches() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo).await;

    for title in ["Consumer Order 1", "Consumer Order 2", "Store Order"] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(json!({"title": title}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/orders?title=Consumer")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let matched: Vec<Order> = test::read_body_json(resp).await;
    assert_eq!(matched.len(), 2);
}

#[actix_web::test]
async fn published_route_lists_published_only() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo.clone()).await;

    repo.insert(&Order {
        id: 0,
        title: "Fulfilled".to_string(),
        description: None,
        published: true,
    })
    .await
    .unwrap();
    repo.insert(&Order {
        id: 0,
        title: "Pending".to_string(),
        description: None,
        published: false,
    })
    .await
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/orders/published")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let published: Vec<Order> = test::read_body_json(resp).await;
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "Fulfilled");
}

#[actix_web::test]
async fn put_unknown_id_returns_404() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo.clone()).await;

    let req = test::TestRequest::put()
        .uri("/api/orders/1")
        .set_json(json!({
            "title": "Store Order Fish 2 Updated",
            "description": "Pompano Updated",
            "published": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.len(), 0);
}

#[actix_web::test]
async fn put_existing_id_overwrites_fields() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({"title": "Store Order Fish 1", "description": "Mackerels"}))
        .to_request();
    let created: Order = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/orders/{}", created.id))
        .set_json(json!({
            "title": "Store Order Fish 1 Updated",
            "description": "Mackerels Updated",
            "published": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Order = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Store Order Fish 1 Updated");
    assert!(updated.published);
}

#[actix_web::test]
async fn delete_returns_204_and_removes_the_order() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({"title": "Gone"}))
        .to_request();
    let created: Order = test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/orders/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.len(), 0);

    // Deleting again is still 204
    let req = test::TestRequest::delete()
        .uri(&format!("/api/orders/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn store_failure_maps_to_500() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let app = spawn_app(repo.clone()).await;

    repo.fail_next();

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({"title": "Doomed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}
