//! # CRUD Conventions
//!
//! A convention layer that turns CRUD verbs into concrete HTTP request
//! descriptors. Given a configured resource, it derives the HTTP method,
//! URL segment order, and parameter placement for `find`, `create`,
//! `update`/`save`, `destroy`, `all`, and `find_by` operations, so
//! application code stops assembling those requests by hand.
//!
//! ## Overview
//!
//! This crate provides:
//! - The [`Crud`] trait: CRUD conventions as provided methods over any
//!   [`RequestBuilder`]
//! - [`ResourceRequest`]: a value-semantic request builder implementing
//!   [`RequestBuilder`]
//! - [`RequestConfig`] and [`RequestConfigBuilder`]: per-resource route
//!   names, verb tables, and the primary-key convention
//! - [`Request`]: the immutable built descriptor handed to whatever
//!   transport the application uses
//!
//! Executing the request — transport, authentication, response handling,
//! retries — is deliberately out of scope; this crate stops at the built
//! [`Request`].
//!
//! ## Quick Start
//!
//! ```rust
//! use crud_conventions::{Crud, HttpMethod, RequestConfig, ResourceRequest, Verb};
//! use serde_json::json;
//!
//! // Configure the resource once
//! let config = RequestConfig::builder()
//!     .routes("photo", "photos")
//!     .method(Verb::Update, HttpMethod::Put)
//!     .primary_key("id")
//!     .build()
//!     .unwrap();
//!
//! // Each operation consumes a fresh builder and yields one descriptor
//! let request = ResourceRequest::new(config.clone()).find(5);
//! assert_eq!(request.path(), "photo/id/5");
//!
//! let request = ResourceRequest::new(config.clone())
//!     .update((5, json!({"title": "sunset"})))
//!     .unwrap();
//! assert_eq!(request.method, HttpMethod::Put);
//! assert_eq!(request.path(), "photo/id/5/update");
//!
//! let request = ResourceRequest::new(config).all();
//! assert_eq!(request.path(), "photos");
//! ```
//!
//! ## Bring Your Own Builder
//!
//! The [`Crud`] methods are provided for every [`RequestBuilder`]
//! implementation, so applications with their own request pipeline only
//! need to implement the builder contract to get the full CRUD surface.
//!
//! ## Design Principles
//!
//! - **No shared mutation**: every builder step consumes `self`, so a
//!   pending request can never be mutated from two call chains
//! - **Tables over branching**: methods and suffixes come from per-verb
//!   configuration, not hard-coded rules
//! - **No validation layer**: identifiers and payloads pass through
//!   untouched; the only raised error is a missing method entry for an
//!   invoked verb

pub mod config;
pub mod crud;
pub mod error;
pub mod request;

// Re-export public types at crate root for convenience
pub use config::{RequestConfig, RequestConfigBuilder, Routes, Verb};
pub use crud::{Crud, CrudError, RecordArgs, RecordId};
pub use error::ConfigError;
pub use request::{HttpMethod, Request, RequestBuilder, ResourceRequest, Scope};
