use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::types::dto::common::MessageResponse;

/// Health check API
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns a fixed message while the server is accepting requests
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<MessageResponse> {
        Json(MessageResponse::new("Server is running"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_running() {
        let response = HealthApi.health().await;

        assert!(response.0.success);
        assert_eq!(response.0.message, "Server is running");
    }
}
