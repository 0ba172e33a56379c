//! Per-resource request configuration.
//!
//! This module provides the configuration consumed by the CRUD convention
//! layer:
//!
//! - [`RequestConfig`]: route names, verb tables, and primary-key settings
//!   for one resource
//! - [`RequestConfigBuilder`]: a builder for constructing [`RequestConfig`]
//!   instances with convention defaults
//! - [`Verb`]: the CRUD verbs that key the method and suffix tables
//! - [`Routes`]: the model/collection route name pair
//!
//! # Conventions
//!
//! The builder seeds both tables with the framework conventions: `create`,
//! `update`, and `destroy` all map to `POST` and each carries its verb name
//! as a URL suffix (`photos/{id}/update` style). Every entry can be
//! overridden per verb, and suffixes can be removed entirely for APIs that
//! address resources by identifier alone.
//!
//! # Example
//!
//! ```rust
//! use crud_conventions::{HttpMethod, RequestConfig, Verb};
//!
//! let config = RequestConfig::builder()
//!     .routes("photo", "photos")
//!     .method(Verb::Update, HttpMethod::Put)
//!     .clear_suffix(Verb::Update)
//!     .primary_key("id")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.method_for(Verb::Update), Some(HttpMethod::Put));
//! assert_eq!(config.suffix_for(Verb::Update), None);
//! assert_eq!(config.suffix_for(Verb::Create), Some("create"));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigError;
use crate::request::HttpMethod;

/// The CRUD verbs that key the method and suffix tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Create a new resource.
    Create,
    /// Update an existing resource.
    Update,
    /// Remove a resource.
    Destroy,
}

impl Verb {
    /// Returns the verb name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The route name pair for a resource.
///
/// The model route addresses a single resource instance (`photo`), the
/// collection route addresses the resource set (`photos`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    model: String,
    collection: String,
}

impl Routes {
    /// Creates a new route pair.
    pub fn new(model: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            collection: collection.into(),
        }
    }

    /// Returns the model (single-instance) route name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the collection route name.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// Configuration for one resource binding.
///
/// Holds everything the CRUD layer needs to translate a verb into a concrete
/// request: route names for both scopes, the verb-to-method table, the
/// verb-to-suffix table, and the primary-key convention.
///
/// Immutable once built; construct via [`RequestConfig::builder`].
///
/// # Thread Safety
///
/// `RequestConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across resource bindings and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    routes: Routes,
    methods: HashMap<Verb, HttpMethod>,
    suffixes: HashMap<Verb, String>,
    primary_key: Option<String>,
}

impl RequestConfig {
    /// Creates a new builder seeded with the convention defaults.
    #[must_use]
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::new()
    }

    /// Returns the route name pair.
    #[must_use]
    pub const fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Returns the HTTP method configured for `verb`, if any.
    ///
    /// A missing entry is not a configuration error here; it surfaces as
    /// [`CrudError::MethodNotConfigured`](crate::crud::CrudError) when the
    /// verb is actually invoked.
    #[must_use]
    pub fn method_for(&self, verb: Verb) -> Option<HttpMethod> {
        self.methods.get(&verb).copied()
    }

    /// Returns the URL suffix configured for `verb`, if any.
    ///
    /// Verbs without an entry simply build URLs with no suffix segment.
    #[must_use]
    pub fn suffix_for(&self, verb: Verb) -> Option<&str> {
        self.suffixes.get(&verb).map(String::as_str)
    }

    /// Returns the primary-key name if one is configured and non-empty.
    ///
    /// An empty name counts as unset: identifiers are then emitted as a
    /// bare URL segment rather than a `key/value` pair. This mirrors the
    /// original convention, where the primary key was checked for
    /// truthiness rather than presence.
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref().filter(|name| !name.is_empty())
    }
}

/// Builder for constructing [`RequestConfig`] instances.
///
/// Starts from the convention defaults described in the
/// [module docs](self); every table entry can be overridden or removed.
#[derive(Debug, Clone)]
pub struct RequestConfigBuilder {
    routes: Option<Routes>,
    methods: HashMap<Verb, HttpMethod>,
    suffixes: HashMap<Verb, String>,
    primary_key: Option<String>,
}

impl RequestConfigBuilder {
    fn new() -> Self {
        let methods = HashMap::from([
            (Verb::Create, HttpMethod::Post),
            (Verb::Update, HttpMethod::Post),
            (Verb::Destroy, HttpMethod::Post),
        ]);
        let suffixes = HashMap::from([
            (Verb::Create, "create".to_string()),
            (Verb::Update, "update".to_string()),
            (Verb::Destroy, "destroy".to_string()),
        ]);

        Self {
            routes: None,
            methods,
            suffixes,
            primary_key: None,
        }
    }

    /// Sets the model and collection route names.
    #[must_use]
    pub fn routes(mut self, model: impl Into<String>, collection: impl Into<String>) -> Self {
        self.routes = Some(Routes::new(model, collection));
        self
    }

    /// Overrides the HTTP method for `verb`.
    #[must_use]
    pub fn method(mut self, verb: Verb, method: HttpMethod) -> Self {
        self.methods.insert(verb, method);
        self
    }

    /// Removes the method entry for `verb`.
    ///
    /// Invoking the verb afterwards fails with
    /// [`CrudError::MethodNotConfigured`](crate::crud::CrudError).
    #[must_use]
    pub fn clear_method(mut self, verb: Verb) -> Self {
        self.methods.remove(&verb);
        self
    }

    /// Overrides the URL suffix for `verb`.
    #[must_use]
    pub fn suffix(mut self, verb: Verb, suffix: impl Into<String>) -> Self {
        self.suffixes.insert(verb, suffix.into());
        self
    }

    /// Removes the suffix entry for `verb`, yielding bare identifier URLs.
    #[must_use]
    pub fn clear_suffix(mut self, verb: Verb) -> Self {
        self.suffixes.remove(&verb);
        self
    }

    /// Sets the primary-key name used by the identifier convention.
    ///
    /// With a non-empty name, identifiers are emitted as a two-segment
    /// `name/id` pair; without one, as a bare `id` segment.
    #[must_use]
    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = Some(name.into());
        self
    }

    /// Builds the [`RequestConfig`], validating required fields.
    ///
    /// An empty primary-key name is accepted for compatibility (it behaves
    /// like no primary key at all) but logged as a likely misconfiguration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRoutes`] if no routes were set.
    pub fn build(self) -> Result<RequestConfig, ConfigError> {
        let routes = self.routes.ok_or(ConfigError::MissingRoutes)?;

        if self.primary_key.as_deref() == Some("") {
            tracing::warn!(
                model = routes.model(),
                "empty primary-key name configured; identifiers will be bare segments"
            );
        }

        Ok(RequestConfig {
            routes,
            methods: self.methods,
            suffixes: self.suffixes,
            primary_key: self.primary_key,
        })
    }
}

impl Default for RequestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
