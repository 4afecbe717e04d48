use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::Config;
use catalog_api::modules::orders::controllers::order_controller;
use catalog_api::modules::orders::{MySqlOrderRepository, OrderService};
use catalog_api::modules::tutorials::controllers::tutorial_controller;
use catalog_api::modules::tutorials::{MySqlTutorialRepository, TutorialService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Catalog API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Apply embedded migrations
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    let tutorial_service = web::Data::new(TutorialService::new(Arc::new(
        MySqlTutorialRepository::new(db_pool.clone()),
    )));
    let order_service = web::Data::new(OrderService::new(Arc::new(MySqlOrderRepository::new(
        db_pool.clone(),
    ))));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(tutorial_service.clone())
            .app_data(order_service.clone())
            .service(
                web::scope("/api")
                    .configure(tutorial_controller::configure)
                    .configure(order_controller::configure),
            )
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "catalog-api"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Catalog API",
        "version": "0.1.0",
        "status": "running"
    }))
}
