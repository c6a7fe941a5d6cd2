use thiserror::Error;

/// The external tax-number validation service failed.
///
/// This is the only error this crate produces. Unknown country codes
/// and absent tax numbers are not failures; they resolve to the
/// "no tax" / "not exempt" defaults instead.
#[derive(Debug, Error)]
#[error("validation service error: {message}")]
pub struct ValidationServiceError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ValidationServiceError {
    /// Create an error from a bare message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The failure description reported by the service layer.
    pub fn message(&self) -> &str {
        &self.message
    }
}
