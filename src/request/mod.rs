//! Request descriptors and the request-builder collaborator.
//!
//! This module provides the pieces the CRUD convention layer delegates to:
//!
//! - **[`HttpMethod`]**: the HTTP methods a descriptor can carry
//! - **[`Request`]**: the immutable built descriptor (method, route,
//!   ordered URL segments, optional parameters)
//! - **[`RequestBuilder`] trait**: the collaborator contract the CRUD
//!   mixin is written against
//! - **[`ResourceRequest`]**: the in-crate [`RequestBuilder`] implementation
//!
//! # Value Semantics
//!
//! Every builder step consumes `self` and returns a fresh value, so a
//! partially built request can never be shared or mutated concurrently.
//! The terminal [`get`](RequestBuilder::get) /
//! [`build_request`](RequestBuilder::build_request) step consumes the
//! builder and produces exactly one [`Request`].
//!
//! # Example
//!
//! ```rust
//! use crud_conventions::{HttpMethod, RequestBuilder, RequestConfig, ResourceRequest};
//!
//! let config = RequestConfig::builder()
//!     .routes("photo", "photos")
//!     .build()
//!     .unwrap();
//!
//! let request = ResourceRequest::new(config)
//!     .collection()
//!     .get(vec!["recent".to_string()]);
//!
//! assert_eq!(request.method, HttpMethod::Get);
//! assert_eq!(request.path(), "photos/recent");
//! ```

mod builder;
mod descriptor;
mod method;

pub use builder::{RequestBuilder, ResourceRequest, Scope};
pub use descriptor::Request;
pub use method::HttpMethod;
