//! Error types for configuration construction.

use thiserror::Error;

/// Errors that can occur when building a [`RequestConfig`](crate::config::RequestConfig).
///
/// # Example
///
/// ```rust
/// use crud_conventions::{ConfigError, RequestConfig};
///
/// let result = RequestConfig::builder().build();
/// assert!(matches!(result, Err(ConfigError::MissingRoutes)));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No route names were provided for the resource.
    ///
    /// Every resource configuration needs a model route and a collection
    /// route; use [`routes`](crate::config::RequestConfigBuilder::routes)
    /// to set both.
    #[error("Request configuration requires model and collection routes")]
    MissingRoutes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_routes_display() {
        let error = ConfigError::MissingRoutes;
        assert!(error.to_string().contains("routes"));
    }
}
