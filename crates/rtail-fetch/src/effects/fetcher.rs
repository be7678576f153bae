use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};

use crate::core::{ResponseClass, classify, parse_http_date};
use crate::data::FetchState;
use crate::effects::clock::Clock;
use crate::effects::http::HttpClient;
use crate::effects::tailer::Tailer;
use crate::error::{Result, TailError};

impl<C: HttpClient, K: Clock> Tailer<C, K> {
    /// Fetch whatever lies past `state.offset()` and append it to `sink`.
    ///
    /// Returns the number of bytes written. Zero is a normal outcome: the
    /// cached `Expires` has not passed yet (no request is made at all), or
    /// the server answered 304.
    ///
    /// On a 2xx answer the `Last-Modified` and `Expires` headers are
    /// remembered for the next call and the offset advances by exactly the
    /// number of bytes written, including bytes written before a failure
    /// part-way through the body.
    ///
    /// # Errors
    ///
    /// - [`TailError::Transport`] if the request or the body stream fails
    /// - [`TailError::Remote`] for any status other than 2xx and 304
    /// - [`TailError::Sink`] if writing to `sink` fails
    pub async fn fetch<W>(&self, state: &mut FetchState, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        if state.is_fresh(self.clock.now()) {
            trace!(url = state.resource(), expires = ?state.expires, "cached copy still fresh");
            return Ok(0);
        }

        let response = self.send_get(state).await?;
        let head = response.head;

        match classify(head.status) {
            ResponseClass::Success => {
                if let Some(t) = head.header("last-modified").and_then(parse_http_date) {
                    state.last_modified = Some(t);
                }
                if let Some(t) = head.header("expires").and_then(parse_http_date) {
                    state.expires = Some(t);
                }
                if state.offset > 0 && head.status != 206 {
                    debug!(status = head.status, "range request answered without a partial response");
                }

                let mut body = response.body;
                let mut written = 0u64;
                while let Some(chunk) = body.next().await {
                    let chunk = chunk.map_err(TailError::transport)?;
                    sink.write_all(&chunk).await.map_err(TailError::Sink)?;
                    let len = chunk.len() as u64;
                    written += len;
                    state.offset += len;
                }
                if written > 0 {
                    sink.flush().await.map_err(TailError::Sink)?;
                }

                debug!(written, offset = state.offset, "fetched");
                Ok(written)
            }
            ResponseClass::NotModified => {
                trace!(url = state.resource(), "not modified");
                Ok(0)
            }
            ResponseClass::Failure => Err(TailError::Remote {
                status: head.status,
                status_line: head.status_line,
            }),
        }
    }
}
