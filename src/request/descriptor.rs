//! The built request descriptor.

use serde::Serialize;
use serde_json::Value;

use crate::request::HttpMethod;

/// A fully built request, ready to hand to a transport.
///
/// Descriptors are immutable snapshots: the route is the scope's resolved
/// route name, the segments are already in final order (prepended
/// identifier segments first, verb suffix last), and the params carry
/// whatever payload was attached. Executing the request over the network is
/// out of scope for this crate.
///
/// # Example
///
/// ```rust
/// use crud_conventions::{Crud, RequestBuilder, RequestConfig, ResourceRequest};
///
/// let config = RequestConfig::builder()
///     .routes("photo", "photos")
///     .build()
///     .unwrap();
///
/// let request = ResourceRequest::new(config).find(5);
/// assert_eq!(request.path(), "photo/5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Request {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The resolved route name for the scope the request was built in.
    pub route: String,
    /// URL segments following the route, in order.
    pub segments: Vec<String>,
    /// Body/query parameters, if any were attached.
    pub params: Option<Value>,
}

impl Request {
    /// Renders the request path by joining the route and its segments.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = self.route.clone();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_with_no_segments_is_the_route() {
        let request = Request {
            method: HttpMethod::Get,
            route: "photos".to_string(),
            segments: vec![],
            params: None,
        };
        assert_eq!(request.path(), "photos");
    }

    #[test]
    fn test_path_joins_segments_in_order() {
        let request = Request {
            method: HttpMethod::Post,
            route: "photo".to_string(),
            segments: vec!["id".to_string(), "5".to_string(), "update".to_string()],
            params: None,
        };
        assert_eq!(request.path(), "photo/id/5/update");
    }

    #[test]
    fn test_descriptor_serializes_for_logging() {
        let request = Request {
            method: HttpMethod::Post,
            route: "photo".to_string(),
            segments: vec!["5".to_string()],
            params: Some(json!({"title": "sunset"})),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["method"], json!("post"));
        assert_eq!(value["route"], json!("photo"));
        assert_eq!(value["segments"], json!(["5"]));
        assert_eq!(value["params"], json!({"title": "sunset"}));
    }
}
