//! Order controller for HTTP endpoints

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::AppError;
use crate::modules::orders::models::OrderPayload;
use crate::modules::orders::services::OrderService;

/// Query parameters for listing orders
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub title: Option<String>,
}

/// POST /api/orders
pub async fn create_order(
    service: web::Data<OrderService>,
    payload: web::Json<OrderPayload>,
) -> HttpResponse {
    match service.create(payload.into_inner()).await {
        Ok(order) => HttpResponse::Created().json(order),
        Err(err) => {
            tracing::error!("Failed to create order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/orders?title=
pub async fn list_orders(
    service: web::Data<OrderService>,
    query: web::Query<ListOrdersQuery>,
) -> HttpResponse {
    match service.get_all(query.title.as_deref()).await {
        Ok(orders) if orders.is_empty() => HttpResponse::NoContent().finish(),
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => {
            tracing::error!("Failed to list orders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/orders/{id}
pub async fn get_order(service: web::Data<OrderService>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();

    match service.get_by_id(id).await {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Failed to find order {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/orders/published
pub async fn list_published_orders(service: web::Data<OrderService>) -> HttpResponse {
    match service.get_by_published(true).await {
        Ok(orders) if orders.is_empty() => HttpResponse::NoContent().finish(),
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => {
            tracing::error!("Failed to list published orders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// PUT /api/orders/{id}
pub async fn update_order(
    service: web::Data<OrderService>,
    path: web::Path<i64>,
    payload: web::Json<OrderPayload>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.update(id, payload.into_inner()).await {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Failed to update order {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// DELETE /api/orders/{id}
pub async fn delete_order(service: web::Data<OrderService>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();

    match service.delete(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            tracing::error!("Failed to delete order {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("/published", web::get().to(list_published_orders))
            .route("/{id}", web::get().to(get_order))
            .route("/{id}", web::put().to(update_order))
            .route("/{id}", web::delete().to(delete_order)),
    );
}
