use poem_openapi::Object;

/// Response carrying only a status message (health check, deletions)
#[derive(Object, Debug, Clone)]
pub struct MessageResponse {
    /// Always true for this response
    pub success: bool,

    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Uniform error body returned by every failing endpoint
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    /// Always false for this response
    pub success: bool,

    /// Short error summary
    pub error: String,

    /// Individual validation failures, in rule order
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<String>>,
}
