// File: services/practice_backend/src/main.rs
mod app_state;

use axum::Router;
use practice_config::load_config;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    practice_common::logging::init();

    let config = Arc::new(load_config()?);
    let state = app_state::build_state(config.clone()).await?;

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app: Router = practice_appointments::routes(state);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use practice_appointments::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Practice Booking API",
                version = "0.1.0",
                description = "Appointment booking, availability and administration",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    if Path::new(STATIC_DIR).is_dir() {
        info!("Serving static files from ./{}", STATIC_DIR);
        app = app.nest_service("/static", ServeDir::new(STATIC_DIR));
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
