/// What the fetcher does with a response, decided by status code alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx: consume headers and body.
    Success,
    /// 304: nothing changed since `If-Modified-Since`.
    NotModified,
    /// Anything else ends the run.
    Failure,
}

/// Classify an HTTP status code.
///
/// # Examples
///
/// ```
/// use rtail_fetch::core::{ResponseClass, classify};
///
/// assert_eq!(classify(206), ResponseClass::Success);
/// assert_eq!(classify(304), ResponseClass::NotModified);
/// assert_eq!(classify(416), ResponseClass::Failure);
/// ```
pub fn classify(status: u16) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Success,
        304 => ResponseClass::NotModified,
        _ => ResponseClass::Failure,
    }
}
