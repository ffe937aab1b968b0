// API layer - HTTP endpoints
pub mod bugs;
pub mod health;
pub mod middleware;

use std::sync::Arc;

pub use bugs::BugsApi;
pub use health::HealthApi;
use poem::middleware::{CatchPanic, Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Build the HTTP application
///
/// The API is nested under `/api` and the Swagger UI under `/swagger`.
/// `public_url` is advertised as the server in the OpenAPI document.
pub fn build_app(app_data: Arc<AppData>, public_url: String) -> impl Endpoint {
    let bugs_api = BugsApi::new(Arc::clone(&app_data.bug_store));

    let api_service = OpenApiService::new((HealthApi, bugs_api), "Bug Tracker API", env!("CARGO_PKG_VERSION"))
        .server(public_url);
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(Cors::new())
        .with(CatchPanic::new().with_handler(middleware::panic_response))
        .with(Tracing)
        .catch_all_error(middleware::render_error)
}
