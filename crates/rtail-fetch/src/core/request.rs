use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::format_http_date;
use crate::data::{Credentials, FetchState, TailOptions};

/// `Authorization` header value for HTTP basic authentication.
///
/// # Examples
///
/// ```
/// use rtail_fetch::Credentials;
/// use rtail_fetch::core::basic_auth_value;
///
/// let value = basic_auth_value(&Credentials::new("Aladdin", "open sesame"));
/// assert_eq!(value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
/// ```
pub fn basic_auth_value(credentials: &Credentials) -> String {
    let token = STANDARD.encode(format!("{}:{}", credentials.user, credentials.password));
    format!("Basic {token}")
}

/// `Range` header value requesting everything from `offset` to the end.
pub fn range_value(offset: u64) -> String {
    format!("bytes={offset}-")
}

/// Headers for the next request against `state`.
///
/// - `Authorization` when credentials with a non-empty user are configured
/// - `User-Agent` when configured
/// - `If-Modified-Since` once a `Last-Modified` has been seen
/// - `Range` only past offset 0, so a cold start always receives the whole resource
pub fn request_headers(state: &FetchState, options: &TailOptions) -> Vec<(String, String)> {
    let mut headers = Vec::with_capacity(4);

    if let Some(credentials) = &options.credentials
        && !credentials.user.is_empty()
    {
        headers.push(("Authorization".to_string(), basic_auth_value(credentials)));
    }
    if let Some(user_agent) = &options.user_agent {
        headers.push(("User-Agent".to_string(), user_agent.clone()));
    }
    if let Some(last_modified) = state.last_modified() {
        headers.push(("If-Modified-Since".to_string(), format_http_date(last_modified)));
    }
    if state.offset() > 0 {
        headers.push(("Range".to_string(), range_value(state.offset())));
    }

    headers
}
