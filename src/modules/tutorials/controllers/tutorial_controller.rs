//! Tutorial controller for HTTP endpoints
//!
//! Maps routes onto [`TutorialService`] calls and translates outcomes
//! into status codes: absent records become 404, empty result lists
//! become 204, and any other failure becomes a bodyless 500.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::AppError;
use crate::modules::tutorials::models::TutorialPayload;
use crate::modules::tutorials::services::TutorialService;

/// Query parameters for listing tutorials
#[derive(Debug, Deserialize)]
pub struct ListTutorialsQuery {
    pub title: Option<String>,
}

/// Create a new tutorial
///
/// POST /api/tutorials
pub async fn create_tutorial(
    service: web::Data<TutorialService>,
    payload: web::Json<TutorialPayload>,
) -> HttpResponse {
    match service.create(payload.into_inner()).await {
        Ok(tutorial) => HttpResponse::Created().json(tutorial),
        Err(err) => {
            tracing::error!("Failed to create tutorial: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// List tutorials, optionally filtered by title substring
///
/// GET /api/tutorials?title=
pub async fn list_tutorials(
    service: web::Data<TutorialService>,
    query: web::Query<ListTutorialsQuery>,
) -> HttpResponse {
    match service.get_all(query.title.as_deref()).await {
        Ok(tutorials) if tutorials.is_empty() => HttpResponse::NoContent().finish(),
        Ok(tutorials) => HttpResponse::Ok().json(tutorials),
        Err(err) => {
            tracing::error!("Failed to list tutorials: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Get a tutorial by id
///
/// GET /api/tutorials/{id}
pub async fn get_tutorial(
    service: web::Data<TutorialService>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.get_by_id(id).await {
        Ok(Some(tutorial)) => HttpResponse::Ok().json(tutorial),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Failed to find tutorial {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// List published tutorials
///
/// GET /api/tutorials/published
pub async fn list_published_tutorials(service: web::Data<TutorialService>) -> HttpResponse {
    match service.get_by_published(true).await {
        Ok(tutorials) if tutorials.is_empty() => HttpResponse::NoContent().finish(),
        Ok(tutorials) => HttpResponse::Ok().json(tutorials),
        Err(err) => {
            tracing::error!("Failed to list published tutorials: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Replace a tutorial's fields, keeping its id
///
/// PUT /api/tutorials/{id}
pub async fn update_tutorial(
    service: web::Data<TutorialService>,
    path: web::Path<i64>,
    payload: web::Json<TutorialPayload>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.update(id, payload.into_inner()).await {
        Ok(Some(tutorial)) => HttpResponse::Ok().json(tutorial),
        Ok(None) => HttpResponse::NotFound().finish(),
        // The row can vanish between the load and the write.
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Failed to update tutorial {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Delete a tutorial by id; 204 whether or not the id existed
///
/// DELETE /api/tutorials/{id}
pub async fn delete_tutorial(
    service: web::Data<TutorialService>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.delete(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            tracing::error!("Failed to delete tutorial {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Delete every tutorial
///
/// DELETE /api/tutorials
pub async fn delete_all_tutorials(service: web::Data<TutorialService>) -> HttpResponse {
    match service.delete_all().await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            tracing::error!("Failed to delete tutorials: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure tutorial routes
///
/// `/published` is registered before `/{id}` so it is not captured as
/// an id segment.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tutorials")
            .route("", web::post().to(create_tutorial))
            .route("", web::get().to(list_tutorials))
            .route("", web::delete().to(delete_all_tutorials))
            .route("/published", web::get().to(list_published_tutorials))
            .route("/{id}", web::get().to(get_tutorial))
            .route("/{id}", web::put().to(update_tutorial))
            .route("/{id}", web::delete().to(delete_tutorial)),
    );
}
