//! # paramkit
//!
//! Typed access to HTTP path and query parameters.
//!
//! Each accessor fetches the raw text of a parameter, converts it to the
//! requested kind, and returns the value or a [`ParamError`]. There is no
//! state: every call reads from the request and allocates only its result.
//!
//! ## Accessors
//!
//! | Accessor | Source | Result |
//! |----------|--------|--------|
//! | [`path`] | Router path bindings | One value |
//! | [`query`] | Query string | First value for the key |
//! | [`query_all`] | Query string | Every value for the key, in order |
//!
//! Each is generic over a [`ParamKind`]: [`String`], [`isize`], [`i8`]..[`i64`],
//! [`usize`] (parsed with a 32-bit ceiling), [`u8`]..[`u64`], [`bool`], [`f32`]
//! and [`f64`]. Named wrappers such as [`path_u64`], [`query_bool`] and
//! [`query_f64_array`] fix the kind.
//!
//! ## Example
//!
//! ```rust
//! use paramkit::PathParams;
//!
//! let mut request = http::Request::builder()
//!     .uri("/users/42/posts?tag=rust&tag=http&score=1E+3")
//!     .body(())
//!     .unwrap();
//!
//! // The router stores what it captured for `/users/{user_id}/posts`.
//! let mut params = PathParams::new();
//! params.insert("user_id", "42");
//! request.extensions_mut().insert(params);
//!
//! let user_id = paramkit::path_u64(&request, "user_id").unwrap();
//! let tags = paramkit::query_string_array(&request, "tag").unwrap();
//! let score = paramkit::query_f64(&request, "score").unwrap();
//!
//! assert_eq!(user_id, 42);
//! assert_eq!(tags, vec!["rust", "http"]);
//! assert_eq!(score, 1000.0);
//! ```
//!
//! ## Error Handling
//!
//! [`ParamError`] has two kinds:
//!
//! - `MissingParameter`: the key is not bound (empty path binding for the
//!   string kind, or a key absent from the query string)
//! - `ConversionFailed`: the text is malformed or out of range
//!
//! ```rust
//! use paramkit::ParamContext;
//!
//! let ctx = ParamContext::builder().path_param("id", "abc").build();
//!
//! let err = paramkit::path_i32(&ctx, "id").unwrap_err();
//! assert!(err.is_conversion_failed());
//! assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
//! ```
//!
//! ## Logging
//!
//! Rejections are reported as `debug` events through [`tracing`] unless
//! [`AccessorConfig::log_rejections`] is off. No subscriber is installed by
//! this crate.

#![doc(html_root_url = "https://docs.rs/paramkit/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod accessors;
mod config;
mod context;
mod error;
mod kind;
mod loader;
mod params;
mod path;
mod query;
mod source;

pub use accessors::*;
pub use config::AccessorConfig;
pub use context::{ParamContext, ParamContextBuilder};
pub use error::{ParamError, ParamErrorKind, ParamLocation};
pub use kind::{ConversionError, ParamKind};
pub use loader::{ConfigError, ConfigLoader};
pub use params::PathParams;
pub use path::{path, path_with};
pub use query::{query, query_all, query_all_with, query_with, QueryDecoding, QueryValues};
pub use source::ParamSource;
