//! CRUD conventions over a request builder.
//!
//! This module is the core of the crate:
//!
//! - **[`Crud`] trait**: provided `find`, `create`, `update`/`save`,
//!   `destroy`, `all`, and `find_by` methods for any
//!   [`RequestBuilder`](crate::request::RequestBuilder)
//! - **[`RecordArgs`]**: the identifier/payload argument shapes accepted by
//!   `update`, `save`, and `destroy`
//! - **[`CrudError`]**: failures surfaced by the terminal build step
//!
//! # Overview
//!
//! Each CRUD method derives the HTTP method, URL segment order, and
//! parameter placement from the builder's
//! [`RequestConfig`](crate::config::RequestConfig) and delegates to a
//! single terminal build call. The layer itself holds no state and performs
//! no validation: identifiers pass through untouched, configured tables
//! drive everything, and the only failure it raises is a missing method
//! entry for an invoked verb.
//!
//! # Example
//!
//! ```rust
//! use crud_conventions::{Crud, RequestConfig, ResourceRequest};
//! use serde_json::json;
//!
//! let config = RequestConfig::builder()
//!     .routes("photo", "photos")
//!     .primary_key("id")
//!     .build()
//!     .unwrap();
//!
//! let request = ResourceRequest::new(config.clone()).find(5);
//! assert_eq!(request.path(), "photo/id/5");
//!
//! let request = ResourceRequest::new(config)
//!     .update((5, json!({"title": "sunset"})))
//!     .unwrap();
//! assert_eq!(request.path(), "photo/id/5/update");
//! ```

mod errors;
mod rules;

pub use errors::CrudError;
pub use rules::{Crud, RecordArgs, RecordId};
