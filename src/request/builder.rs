//! The request-builder collaborator contract and its default implementation.

use serde_json::Value;

use crate::config::RequestConfig;
use crate::request::{HttpMethod, Request};

/// The scope a request is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// A single resource instance; uses the model route and accepts
    /// identifier segments.
    Model,
    /// The resource set as a whole; uses the collection route.
    Collection,
}

/// The collaborator contract the CRUD convention layer builds against.
///
/// Implementations accumulate URL segments and parameters, then produce an
/// immutable [`Request`] from the terminal [`get`](Self::get) or
/// [`build_request`](Self::build_request) step. All steps consume `self`
/// and return a fresh value, so an accumulated request can never be shared
/// between call chains.
///
/// The crate ships [`ResourceRequest`] as the default implementation;
/// callers with their own request pipeline can implement this trait and get
/// the full [`Crud`](crate::crud::Crud) surface for free.
pub trait RequestBuilder: Sized {
    /// Returns the resource configuration this builder was bound to.
    fn config(&self) -> &RequestConfig;

    /// Switches to model scope (single-instance route).
    #[must_use]
    fn model(self) -> Self;

    /// Switches to collection scope (resource-set route).
    #[must_use]
    fn collection(self) -> Self;

    /// Inserts `segments` before any pending URL segments, preserving
    /// their relative order.
    #[must_use]
    fn prepend(self, segments: Vec<String>) -> Self;

    /// Attaches body/query parameters to the pending request.
    ///
    /// A later call replaces the previous payload; the convention layer
    /// attaches parameters at most once per built request.
    #[must_use]
    fn with_params(self, data: Value) -> Self;

    /// Finalizes the pending request with `method`, appending
    /// `extra_segments` after any accumulated segments.
    fn build_request(self, method: HttpMethod, extra_segments: Vec<String>) -> Request;

    /// Finalizes a GET request over the given path segments.
    fn get(self, segments: Vec<String>) -> Request {
        self.build_request(HttpMethod::Get, segments)
    }
}

/// The default [`RequestBuilder`] implementation.
///
/// One `ResourceRequest` describes one pending request against one resource
/// binding. It starts in model scope with no segments and no parameters.
///
/// # Example
///
/// ```rust
/// use crud_conventions::{HttpMethod, RequestBuilder, RequestConfig, ResourceRequest};
///
/// let config = RequestConfig::builder()
///     .routes("photo", "photos")
///     .build()
///     .unwrap();
///
/// let request = ResourceRequest::new(config)
///     .prepend(vec!["5".to_string()])
///     .get(vec!["comments".to_string()]);
///
/// assert_eq!(request.path(), "photo/5/comments");
/// ```
#[derive(Clone, Debug)]
pub struct ResourceRequest {
    config: RequestConfig,
    scope: Scope,
    segments: Vec<String>,
    params: Option<Value>,
}

impl ResourceRequest {
    /// Creates a new pending request bound to `config`, in model scope.
    #[must_use]
    pub const fn new(config: RequestConfig) -> Self {
        Self {
            config,
            scope: Scope::Model,
            segments: Vec::new(),
            params: None,
        }
    }

    /// Returns the current scope.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the pending URL segments accumulated so far.
    #[must_use]
    pub fn pending_segments(&self) -> &[String] {
        &self.segments
    }
}

impl RequestBuilder for ResourceRequest {
    fn config(&self) -> &RequestConfig {
        &self.config
    }

    fn model(mut self) -> Self {
        self.scope = Scope::Model;
        self
    }

    fn collection(mut self) -> Self {
        self.scope = Scope::Collection;
        self
    }

    fn prepend(mut self, segments: Vec<String>) -> Self {
        self.segments.splice(0..0, segments);
        self
    }

    fn with_params(mut self, data: Value) -> Self {
        self.params = Some(data);
        self
    }

    fn build_request(self, method: HttpMethod, extra_segments: Vec<String>) -> Request {
        let route = match self.scope {
            Scope::Model => self.config.routes().model(),
            Scope::Collection => self.config.routes().collection(),
        }
        .to_string();

        let mut segments = self.segments;
        segments.extend(extra_segments);

        tracing::debug!(%method, route, ?segments, "built request descriptor");

        Request {
            method,
            route,
            segments,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> ResourceRequest {
        let config = RequestConfig::builder()
            .routes("photo", "photos")
            .build()
            .unwrap();
        ResourceRequest::new(config)
    }

    #[test]
    fn test_new_builder_starts_in_model_scope() {
        let request = builder();
        assert_eq!(request.scope(), Scope::Model);
        assert!(request.pending_segments().is_empty());
    }

    #[test]
    fn test_scope_switch_resolves_route() {
        let request = builder().collection().get(vec![]);
        assert_eq!(request.route, "photos");

        let request = builder().collection().model().get(vec![]);
        assert_eq!(request.route, "photo");
    }

    #[test]
    fn test_prepend_inserts_before_existing_segments() {
        let request = builder()
            .prepend(vec!["comments".to_string()])
            .prepend(vec!["id".to_string(), "5".to_string()])
            .get(vec![]);

        assert_eq!(request.segments, vec!["id", "5", "comments"]);
    }

    #[test]
    fn test_build_request_appends_extra_segments_last() {
        let request = builder()
            .prepend(vec!["5".to_string()])
            .build_request(HttpMethod::Post, vec!["update".to_string()]);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.segments, vec!["5", "update"]);
    }

    #[test]
    fn test_with_params_attaches_payload() {
        let request = builder()
            .with_params(json!({"title": "sunset"}))
            .build_request(HttpMethod::Post, vec![]);

        assert_eq!(request.params, Some(json!({"title": "sunset"})));
    }

    #[test]
    fn test_later_params_replace_earlier_ones() {
        let request = builder()
            .with_params(json!({"a": 1}))
            .with_params(json!({"b": 2}))
            .get(vec![]);

        assert_eq!(request.params, Some(json!({"b": 2})));
    }

    #[test]
    fn test_get_is_a_get_build() {
        let request = builder().get(vec!["recent".to_string()]);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.segments, vec!["recent"]);
        assert!(request.params.is_none());
    }
}
