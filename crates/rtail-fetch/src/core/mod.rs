//! Pure transformations for HTTP tailing.
//!
//! Nothing in this module performs I/O: it turns a [`FetchState`] and the
//! configured options into request headers, parses and formats HTTP dates,
//! and sorts response statuses into the outcomes the fetcher acts on.
//!
//! [`FetchState`]: crate::FetchState

mod http_date;
mod request;
mod validation;

pub use http_date::{format_http_date, parse_http_date};
pub use request::{basic_auth_value, range_value, request_headers};
pub use validation::{ResponseClass, classify};
