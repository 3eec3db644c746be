use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_gateway::config::Config;
use portfolio_gateway::handlers::HealthResponse;
use portfolio_gateway::models::{CategoriesResponse, Project, Technology};
use portfolio_gateway::state::AppState;
use portfolio_gateway::telemetry::init_tracing;
use portfolio_gateway::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health::health, handlers::projects::list_projects),
    components(schemas(HealthResponse, Project, Technology, CategoriesResponse)),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Projects", description = "Project listing proxied to the catalog")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();
    let upstream = config.catalog_api_url.clone();

    let state = AppState::new(config).expect("Failed to initialize application state");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Gateway started on http://{}", addr);
    tracing::info!("Forwarding /api/projects to {}", upstream);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Gateway shutdown complete");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
