//! The CRUD rule set: verb + identifier + payload to request descriptor.

use serde_json::Value;

use crate::config::Verb;
use crate::crud::CrudError;
use crate::request::{Request, RequestBuilder};

/// The identifier type for model-scoped operations.
pub type RecordId = u64;

/// Identifier/payload argument shapes for `update`, `save`, and `destroy`.
///
/// The original convention accepted `(id, data)`, `(id)`, or `(data)` and
/// told them apart by checking whether the first argument was an integer.
/// Here the distinction is carried by the type instead; the `From` impls
/// keep all three call shapes available at the call site:
///
/// ```rust
/// use crud_conventions::{Crud, RequestConfig, ResourceRequest};
/// use serde_json::json;
///
/// let config = RequestConfig::builder()
///     .routes("photo", "photos")
///     .build()
///     .unwrap();
///
/// // (id, data), (id), and (data) respectively:
/// ResourceRequest::new(config.clone()).update((5, json!({"title": "a"}))).unwrap();
/// ResourceRequest::new(config.clone()).destroy(5).unwrap();
/// ResourceRequest::new(config).update(json!({"title": "a"})).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordArgs {
    /// The operation targets a specific record.
    Identified {
        /// The record's identifier.
        id: RecordId,
        /// The payload, if the call shape carried one.
        data: Option<Value>,
    },
    /// The operation carries a payload but no identifier.
    Anonymous {
        /// The payload.
        data: Value,
    },
}

impl From<RecordId> for RecordArgs {
    fn from(id: RecordId) -> Self {
        Self::Identified { id, data: None }
    }
}

impl From<(RecordId, Value)> for RecordArgs {
    fn from((id, data): (RecordId, Value)) -> Self {
        Self::Identified {
            id,
            data: Some(data),
        }
    }
}

impl From<Value> for RecordArgs {
    fn from(data: Value) -> Self {
        Self::Anonymous { data }
    }
}

/// CRUD conventions for any [`RequestBuilder`].
///
/// Every method here is a pure translation: it derives the HTTP method,
/// URL segment order, and parameter placement from the builder's
/// configuration and finishes with a single terminal build call. The
/// blanket impl makes these available on every [`RequestBuilder`]
/// implementation, including caller-supplied ones.
///
/// The GET family (`find`, `all`, `find_by`) cannot fail and returns the
/// built [`Request`] directly; `create`, `update`, `save`, and `destroy`
/// return a `Result` because their HTTP method comes from the configured
/// verb table, which may have no entry.
pub trait Crud: RequestBuilder {
    /// Builds a GET for a single record, applying the identifier
    /// convention in model scope.
    ///
    /// The identifier is passed through untouched; no validation happens
    /// in this layer.
    #[must_use]
    fn find(self, id: RecordId) -> Request {
        self.model().id(id).get(Vec::new())
    }

    /// Applies the identifier-prefixing convention used by [`find`](Self::find),
    /// [`update`](Self::update), and [`destroy`](Self::destroy).
    ///
    /// With a non-empty primary-key name configured, prepends the
    /// two-segment pair `name/id`; otherwise prepends the bare `id`
    /// segment. Prepended segments land before anything already pending.
    #[must_use]
    fn id(self, id: RecordId) -> Self {
        let segments = match self.config().primary_key() {
            Some(name) => vec![name.to_string(), id.to_string()],
            None => vec![id.to_string()],
        };
        self.prepend(segments)
    }

    /// Shared rule for [`update`](Self::update) and [`destroy`](Self::destroy).
    ///
    /// Applies the identifier convention when `args` carries an id, appends
    /// the verb's suffix when one is configured (a missing suffix entry is
    /// not an error), attaches the payload for `Verb::Update` only, and
    /// finishes in model scope with the verb's configured method.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::MethodNotConfigured`] if the method table has
    /// no entry for `verb`.
    fn update_or_destroy(self, verb: Verb, args: RecordArgs) -> Result<Request, CrudError> {
        let (builder, data) = match args {
            RecordArgs::Identified { id, data } => (self.id(id), data),
            RecordArgs::Anonymous { data } => (self, Some(data)),
        };

        let method = builder
            .config()
            .method_for(verb)
            .ok_or(CrudError::MethodNotConfigured { verb })?;
        let extra: Vec<String> = builder
            .config()
            .suffix_for(verb)
            .map(str::to_string)
            .into_iter()
            .collect();

        let builder = match data {
            // Only update carries a body; destroy drops any payload it was given.
            Some(data) if verb == Verb::Update => builder.with_params(data),
            _ => builder,
        };

        Ok(builder.model().build_request(method, extra))
    }

    /// Builds an update request for a record.
    ///
    /// Accepts any [`RecordArgs`] shape: `(id, data)`, a bare `id`, or a
    /// bare payload for endpoints that identify the record another way.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::MethodNotConfigured`] if no update method is
    /// configured.
    fn update(self, args: impl Into<RecordArgs>) -> Result<Request, CrudError> {
        self.update_or_destroy(Verb::Update, args.into())
    }

    /// Synonym for [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::MethodNotConfigured`] if no update method is
    /// configured.
    fn save(self, args: impl Into<RecordArgs>) -> Result<Request, CrudError> {
        self.update(args)
    }

    /// Builds a destroy request for a record.
    ///
    /// Never attaches a body, even when `args` carries a payload.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::MethodNotConfigured`] if no destroy method is
    /// configured.
    fn destroy(self, args: impl Into<RecordArgs>) -> Result<Request, CrudError> {
        self.update_or_destroy(Verb::Destroy, args.into())
    }

    /// Builds a create request with `data` as the payload.
    ///
    /// Creation never targets an existing record, so no identifier
    /// convention applies; the configured create method and suffix are
    /// used in the current scope.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::MethodNotConfigured`] if no create method is
    /// configured.
    fn create(self, data: Value) -> Result<Request, CrudError> {
        let method = self
            .config()
            .method_for(Verb::Create)
            .ok_or(CrudError::MethodNotConfigured { verb: Verb::Create })?;
        let extra: Vec<String> = self
            .config()
            .suffix_for(Verb::Create)
            .map(str::to_string)
            .into_iter()
            .collect();

        Ok(self.with_params(data).build_request(method, extra))
    }

    /// Builds a GET against the collection route, with no identifier or
    /// payload.
    #[must_use]
    fn all(self) -> Request {
        self.collection().get(Vec::new())
    }

    /// Builds a GET searching by `key`, and by `value` when one is given.
    ///
    /// A `None` or empty value yields the single-segment form
    /// (`.../email`), searching for the key alone. The identifier
    /// convention does not apply here; `key` and `value` become plain
    /// path segments in the current scope.
    #[must_use]
    fn find_by<K, V>(self, key: K, value: Option<V>) -> Request
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut segments = vec![key.into()];
        if let Some(value) = value.map(Into::into).filter(|v| !v.is_empty()) {
            segments.push(value);
        }
        self.get(segments)
    }
}

impl<T: RequestBuilder> Crud for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequestConfig;
    use crate::request::{HttpMethod, ResourceRequest};
    use serde_json::json;

    fn photo(primary_key: Option<&str>) -> ResourceRequest {
        let mut builder = RequestConfig::builder().routes("photo", "photos");
        if let Some(name) = primary_key {
            builder = builder.primary_key(name);
        }
        ResourceRequest::new(builder.build().unwrap())
    }

    #[test]
    fn test_record_args_from_id() {
        assert_eq!(
            RecordArgs::from(5),
            RecordArgs::Identified { id: 5, data: None }
        );
    }

    #[test]
    fn test_record_args_from_id_and_data() {
        assert_eq!(
            RecordArgs::from((5, json!({"a": 1}))),
            RecordArgs::Identified {
                id: 5,
                data: Some(json!({"a": 1})),
            }
        );
    }

    #[test]
    fn test_record_args_from_data() {
        assert_eq!(
            RecordArgs::from(json!({"a": 1})),
            RecordArgs::Anonymous {
                data: json!({"a": 1}),
            }
        );
    }

    #[test]
    fn test_id_prepends_bare_segment_without_primary_key() {
        let builder = photo(None).prepend(vec!["comments".to_string()]).id(5);
        assert_eq!(builder.pending_segments(), ["5", "comments"]);
    }

    #[test]
    fn test_id_prepends_key_value_pair_with_primary_key() {
        let builder = photo(Some("id")).id(5);
        assert_eq!(builder.pending_segments(), ["id", "5"]);
    }

    #[test]
    fn test_id_with_empty_primary_key_name_stays_bare() {
        let builder = photo(Some("")).id(5);
        assert_eq!(builder.pending_segments(), ["5"]);
    }

    #[test]
    fn test_find_is_an_identified_get_in_model_scope() {
        let request = photo(Some("id")).find(5);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "photo/id/5");
        assert!(request.params.is_none());
    }

    #[test]
    fn test_update_attaches_payload_and_suffix() {
        let request = photo(None).update((5, json!({"name": "a"}))).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "photo/5/update");
        assert_eq!(request.params, Some(json!({"name": "a"})));
    }

    #[test]
    fn test_update_without_identifier_skips_identifier_segment() {
        let request = photo(Some("id")).update(json!({"name": "a"})).unwrap();
        assert_eq!(request.path(), "photo/update");
        assert_eq!(request.params, Some(json!({"name": "a"})));
    }

    #[test]
    fn test_destroy_never_attaches_a_body() {
        let request = photo(None)
            .update_or_destroy(Verb::Destroy, (5, json!({"name": "a"})).into())
            .unwrap();
        assert_eq!(request.path(), "photo/5/destroy");
        assert!(request.params.is_none());
    }

    #[test]
    fn test_destroy_by_id_alone() {
        let request = photo(Some("id")).destroy(5).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "photo/id/5/destroy");
    }

    #[test]
    fn test_missing_suffix_entry_is_tolerated() {
        let config = RequestConfig::builder()
            .routes("photo", "photos")
            .clear_suffix(Verb::Update)
            .build()
            .unwrap();
        let request = ResourceRequest::new(config).update((5, json!({}))).unwrap();
        assert_eq!(request.path(), "photo/5");
    }

    #[test]
    fn test_missing_method_entry_is_an_error() {
        let config = RequestConfig::builder()
            .routes("photo", "photos")
            .clear_method(Verb::Destroy)
            .build()
            .unwrap();
        let result = ResourceRequest::new(config).destroy(5);
        assert_eq!(
            result.unwrap_err(),
            CrudError::MethodNotConfigured {
                verb: Verb::Destroy,
            }
        );
    }

    #[test]
    fn test_create_uses_create_tables_without_identifier() {
        let request = photo(Some("id")).create(json!({"x": 1})).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "photo/create");
        assert_eq!(request.params, Some(json!({"x": 1})));
    }

    #[test]
    fn test_all_is_a_bare_collection_get() {
        let request = photo(Some("id")).all();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "photos");
        assert!(request.params.is_none());
    }

    #[test]
    fn test_find_by_key_only() {
        let request = photo(None).find_by("email", None::<&str>);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "photo/email");
    }

    #[test]
    fn test_find_by_key_and_value() {
        let request = photo(None).find_by("email", Some("a@b.com"));
        assert_eq!(request.path(), "photo/email/a@b.com");
    }

    #[test]
    fn test_find_by_empty_value_counts_as_absent() {
        let request = photo(None).find_by("email", Some(""));
        assert_eq!(request.path(), "photo/email");
    }

    #[test]
    fn test_save_matches_update() {
        let saved = photo(Some("id")).save((5, json!({"name": "a"}))).unwrap();
        let updated = photo(Some("id")).update((5, json!({"name": "a"}))).unwrap();
        assert_eq!(saved, updated);
    }
}
