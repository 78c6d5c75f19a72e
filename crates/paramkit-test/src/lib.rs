//! # paramkit-test
//!
//! Test utilities for `paramkit`: build in-memory requests that look like
//! what a router hands to a handler, with path bindings stored as a
//! [`PathParams`](paramkit::PathParams) extension and a query string
//! assembled pair by pair.
//!
//! ## Example
//!
//! ```
//! use paramkit_test::{init_test_logging, TestRequest};
//!
//! init_test_logging();
//!
//! let request = TestRequest::get("/orgs/acme/search")
//!     .path_param("org", "acme")
//!     .raw_query("limit=10&exp=1E+3")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(paramkit::path_string(&request, "org").unwrap(), "acme");
//! assert_eq!(paramkit::query_u16(&request, "limit").unwrap(), 10);
//! assert_eq!(paramkit::query_f32(&request, "exp").unwrap(), 1000.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;
mod request;

pub use error::TestError;
pub use logging::{init_logging, init_test_logging, LogConfig};
pub use request::TestRequest;
