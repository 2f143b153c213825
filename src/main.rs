//! LabTrack Server - Laboratory Equipment Inventory and Project Tracker
//!
//! A REST JSON API server for managing lab equipment, projects and
//! project inquiries.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labtrack_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("labtrack_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LabTrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Make sure the uploads root exists before serving from it
    tokio::fs::create_dir_all(&config.uploads.root_dir)
        .await
        .expect("Failed to create uploads directory");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.email.clone(), &config.uploads);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads_root = state.config.uploads.root_dir.clone();

    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Devices
        .route("/devices", get(api::devices::list_devices))
        .route(
            "/device",
            get(api::devices::get_device)
                .post(api::devices::create_device)
                .put(api::devices::update_device)
                .delete(api::devices::delete_device),
        )
        // Manufacturers
        .route(
            "/manufacturers",
            get(api::manufacturers::list_manufacturers)
                .put(api::manufacturers::bulk_update_manufacturers),
        )
        .route(
            "/manufacturer",
            get(api::manufacturers::get_manufacturer)
                .post(api::manufacturers::create_manufacturer)
                .put(api::manufacturers::update_manufacturer)
                .delete(api::manufacturers::delete_manufacturer),
        )
        .route(
            "/all-manufacturers",
            delete(api::manufacturers::delete_all_manufacturers),
        )
        // Tags
        .route(
            "/tags",
            get(api::tags::list_tags).put(api::tags::bulk_update_tags),
        )
        .route(
            "/tag",
            get(api::tags::get_tag)
                .post(api::tags::create_tag)
                .put(api::tags::update_tag)
                .delete(api::tags::delete_tag),
        )
        .route("/all-tags", delete(api::tags::delete_all_tags))
        // Projects
        .route("/projects", get(api::projects::list_projects))
        .route(
            "/project",
            get(api::projects::get_project)
                .post(api::projects::create_project)
                .put(api::projects::update_project)
                .delete(api::projects::delete_project),
        )
        .route("/all-projects", delete(api::projects::delete_all_projects))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/filtered-users", get(api::users::list_filtered_users))
        .route("/users/role/:role", get(api::users::list_users_by_role))
        .route("/check-password", get(api::users::check_password))
        .route(
            "/user",
            get(api::users::get_user)
                .post(api::users::create_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .route("/all-users", delete(api::users::delete_all_users))
        // Inquiries
        .route("/inquiries", get(api::inquiries::list_inquiries))
        .route(
            "/inquiry",
            get(api::inquiries::get_inquiry)
                .post(api::inquiries::create_inquiry)
                .put(api::inquiries::update_inquiry)
                .delete(api::inquiries::delete_inquiry),
        )
        .route("/inquiry/confirm", post(api::inquiries::confirm_inquiry))
        .route("/inquiry/decision", post(api::inquiries::decide_inquiry))
        // Histories
        .route("/histories", get(api::histories::list_histories))
        .route(
            "/history",
            get(api::histories::get_history)
                .post(api::histories::append_history)
                .put(api::histories::update_history)
                .delete(api::histories::delete_history),
        )
        .route("/all-histories", delete(api::histories::delete_all_histories))
        // Images
        .route("/images/upload", post(api::images::upload_images))
        // Mailer
        .route("/mailer/send-test-email", post(api::mailer::send_test_email))
        .route(
            "/mailer/send-inquiry-confirmation-email",
            post(api::mailer::send_inquiry_confirmation_email),
        )
        .route(
            "/mailer/send-new-project-inquiry-opening-email",
            post(api::mailer::send_new_project_inquiry_opening_email),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(api_routes)
        .nest_service("/images", ServeDir::new(uploads_root))
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
