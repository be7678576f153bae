use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
///
/// The stream yields `Result<Bytes, E>` where E is the error type from the HTTP client.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status and headers of a response, without its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// Numeric status code, e.g. `206`.
    pub status: u16,

    /// Status line as reported by the server, e.g. `"404 Not Found"`.
    pub status_line: String,

    /// Header name/value pairs in the order received.
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    pub fn new(status: u16, status_line: impl Into<String>) -> Self {
        Self {
            status,
            status_line: status_line.into(),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `Content-Length`, if present and a valid unsigned integer.
    pub fn content_length(&self) -> Option<u64> {
        self.header("content-length")
            .and_then(|v| v.trim().parse::<u64>().ok())
    }
}

/// A response whose body has not been read yet.
pub struct HttpResponse<E> {
    pub head: ResponseHead,
    pub body: BoxStream<'static, std::result::Result<Bytes, E>>,
}

impl<E> std::fmt::Debug for HttpResponse<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("head", &self.head)
            .field("body", &"{ ... }")
            .finish()
    }
}

/// Asynchronous HTTP client abstraction.
///
/// This trait is the whole network surface the tailer needs: a metadata-only
/// probe and a GET whose body is streamed. Implementations handle their own
/// redirect following, timeouts and TLS. They must not interpret status
/// codes: a 404 is a successful exchange at this level.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - In-memory fakes for testing
///
/// [`ReqwestClient`]: crate::ReqwestClient
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a HEAD request and return status and headers.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained (DNS failure,
    /// connection refused, handshake or timeout).
    fn head(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = std::result::Result<ResponseHead, Self::Error>> + Send;

    /// Issue a GET request and return the response with its body as a stream.
    ///
    /// # Errors
    ///
    /// Same as [`head`](HttpClient::head). Failures while reading the body
    /// surface as `Err` items of the body stream.
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use futures_util::StreamExt;

    use crate::data::ClientConfig;
    use crate::error::{Result, TailError};

    /// Production HTTP client implementation using reqwest.
    ///
    /// Built without reqwest's decompression features, so body bytes map
    /// one-to-one onto resource offsets.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a client from transport settings.
        pub fn new(config: &ClientConfig) -> Result<Self> {
            let mut builder = reqwest::Client::builder()
                .connect_timeout(config.timeouts.connect)
                .tcp_keepalive(config.timeouts.keep_alive)
                .danger_accept_invalid_certs(config.accept_invalid_certs);
            if let Some(timeout) = config.timeouts.request {
                builder = builder.timeout(timeout);
            }
            let client = builder
                .build()
                .map_err(|e| TailError::Client(e.to_string()))?;
            Ok(Self { client })
        }

        /// Wrap an already configured reqwest client.
        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }

        fn head_of(response: &reqwest::Response) -> ResponseHead {
            let status = response.status();
            // hyper keeps the reason phrase only when it differs from the
            // canonical one.
            let reason = match response.extensions().get::<hyper::ext::ReasonPhrase>() {
                Some(phrase) => Some(String::from_utf8_lossy(phrase.as_bytes()).into_owned()),
                None => status.canonical_reason().map(str::to_string),
            };
            let status_line = match reason {
                Some(reason) if !reason.is_empty() => format!("{} {}", status.as_str(), reason),
                _ => status.as_str().to_string(),
            };
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();
            ResponseHead {
                status: status.as_u16(),
                status_line,
                headers,
            }
        }

        fn request(
            &self,
            method: reqwest::Method,
            url: &str,
            headers: &[(String, String)],
        ) -> reqwest::RequestBuilder {
            let mut request = self.client.request(method, url);
            for (key, value) in headers {
                request = request.header(key, value);
            }
            request
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn head(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> std::result::Result<ResponseHead, Self::Error> {
            let response = self.request(reqwest::Method::HEAD, url, headers).send().await?;
            Ok(Self::head_of(&response))
        }

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.request(reqwest::Method::GET, url, headers).send().await?;
            let head = Self::head_of(&response);
            let body = response.bytes_stream().map(|chunk| chunk.map(Bytes::from));
            Ok(HttpResponse {
                head,
                body: Box::pin(body),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
