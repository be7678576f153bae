use std::io::Write;

use tracing::debug;

use crate::core::request_headers;
use crate::data::{FetchState, TailOptions};
use crate::effects::clock::{Clock, SystemClock};
use crate::effects::dump::HeaderDump;
use crate::effects::http::{HttpClient, HttpResponse, ResponseHead};
use crate::error::{Result, TailError};

/// Drives the tail protocol against one [`HttpClient`].
///
/// The tailer itself is immutable; all per-run state lives in the
/// [`FetchState`] returned by [`initiate`](Tailer::initiate) and handed back
/// to every [`fetch`](Tailer::fetch).
pub struct Tailer<C: HttpClient, K: Clock = SystemClock> {
    pub(crate) client: C,
    pub(crate) options: TailOptions,
    pub(crate) clock: K,
    dump: Option<HeaderDump>,
}

impl<C: HttpClient> Tailer<C> {
    /// Create a tailer using the system clock.
    ///
    /// When `options.dump_headers` is set, header blocks go to stderr.
    pub fn new(client: C, options: TailOptions) -> Self {
        let dump = options.dump_headers.then(HeaderDump::stderr);
        Self {
            client,
            options,
            clock: SystemClock,
            dump,
        }
    }
}

impl<C: HttpClient, K: Clock> Tailer<C, K> {
    /// Replace the clock used for `Expires` checks.
    pub fn with_clock<K2: Clock>(self, clock: K2) -> Tailer<C, K2> {
        Tailer {
            client: self.client,
            options: self.options,
            clock,
            dump: self.dump,
        }
    }

    /// Send the header dump to `out` instead of stderr.
    ///
    /// Has no effect unless `dump_headers` is enabled in the options.
    #[must_use]
    pub fn with_header_dump(mut self, out: impl Write + Send + 'static) -> Self {
        if self.options.dump_headers {
            self.dump = Some(HeaderDump::new(out));
        }
        self
    }

    pub fn options(&self) -> &TailOptions {
        &self.options
    }

    pub(crate) async fn send_head(&self, state: &FetchState) -> Result<ResponseHead> {
        let headers = request_headers(state, &self.options);
        debug!(url = state.resource(), "HEAD");
        if let Some(dump) = &self.dump {
            dump.request("HEAD", state.resource(), &headers);
        }

        let head = self
            .client
            .head(state.resource(), &headers)
            .await
            .map_err(TailError::transport)?;

        if let Some(dump) = &self.dump {
            dump.response(&head);
        }
        Ok(head)
    }

    pub(crate) async fn send_get(&self, state: &FetchState) -> Result<HttpResponse<C::Error>> {
        let headers = request_headers(state, &self.options);
        debug!(url = state.resource(), offset = state.offset(), "GET");
        if let Some(dump) = &self.dump {
            dump.request("GET", state.resource(), &headers);
        }

        let response = self
            .client
            .get(state.resource(), &headers)
            .await
            .map_err(TailError::transport)?;

        if let Some(dump) = &self.dump {
            dump.response(&response.head);
        }
        Ok(response)
    }
}

impl<C: HttpClient + std::fmt::Debug, K: Clock + std::fmt::Debug> std::fmt::Debug for Tailer<C, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tailer")
            .field("client", &self.client)
            .field("options", &self.options)
            .field("clock", &self.clock)
            .field("dump", &self.dump.is_some())
            .finish()
    }
}
