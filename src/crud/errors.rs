//! Error types for CRUD request building.

use thiserror::Error;

use crate::config::Verb;

/// Errors surfaced while translating a CRUD verb into a request.
///
/// Missing suffix entries are tolerated (the suffix is simply omitted);
/// a missing method entry is not, since no request can be built without
/// an HTTP method.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrudError {
    /// The configuration's method table has no entry for the invoked verb.
    #[error("No HTTP method configured for verb '{verb}'")]
    MethodNotConfigured {
        /// The verb whose lookup failed.
        verb: Verb,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_configured_names_the_verb() {
        let error = CrudError::MethodNotConfigured {
            verb: Verb::Destroy,
        };
        assert!(error.to_string().contains("destroy"));
    }
}
