//! Accessor configuration.

use crate::{ParamError, ParamKind, QueryDecoding};
use serde::{Deserialize, Serialize};

/// Settings shared by the `*_with` accessors.
///
/// The plain accessors ([`path`](crate::path), [`query`](crate::query),
/// [`query_all`](crate::query_all) and the named wrappers) use
/// [`AccessorConfig::default`].
///
/// # Example
///
/// ```rust
/// use paramkit::{AccessorConfig, QueryDecoding};
///
/// let config: AccessorConfig = toml::from_str(r#"
///     query_decoding = "percent"
///     log_rejections = false
/// "#).unwrap();
///
/// assert_eq!(config.query_decoding, QueryDecoding::Percent);
/// assert!(!config.log_rejections);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessorConfig {
    /// How query strings are decoded.
    pub query_decoding: QueryDecoding,

    /// Emit a `debug` event for every rejected parameter.
    pub log_rejections: bool,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            query_decoding: QueryDecoding::Form,
            log_rejections: true,
        }
    }
}

impl AccessorConfig {
    /// Sets the query decoding.
    #[must_use]
    pub fn with_query_decoding(mut self, decoding: QueryDecoding) -> Self {
        self.query_decoding = decoding;
        self
    }

    /// Turns rejection events on or off.
    #[must_use]
    pub fn with_log_rejections(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }

    pub(crate) fn rejected<T: ParamKind>(&self, err: ParamError) -> ParamError {
        if self.log_rejections {
            tracing::debug!(
                param.source = %err.location(),
                param.key = err.field(),
                param.kind = T::NAME,
                error = %err,
                "Parameter rejected"
            );
        }
        err
    }
}
