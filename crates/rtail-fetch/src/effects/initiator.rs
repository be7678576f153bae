use tracing::{debug, warn};

use crate::data::{FetchState, SizeSpec};
use crate::effects::clock::Clock;
use crate::effects::http::HttpClient;
use crate::effects::tailer::Tailer;
use crate::error::Result;

impl<C: HttpClient, K: Clock> Tailer<C, K> {
    /// Determine the offset at which tailing `url` begins.
    ///
    /// An absolute spec (`+N`) needs no network access. A tail spec (`N`)
    /// probes the resource with HEAD and starts `N` bytes before its end,
    /// clamped at 0. When the probe reports no usable `Content-Length` the
    /// whole resource is fetched from offset 0.
    ///
    /// # Errors
    ///
    /// A transport failure of the probe is fatal: without it there is no
    /// offset to start from.
    pub async fn initiate(&self, url: &str, spec: SizeSpec) -> Result<FetchState> {
        let mut state = FetchState::new(url, 0);

        if spec.from_start() {
            state.offset = spec.magnitude();
            debug!(url, offset = state.offset, "starting at absolute offset");
            return Ok(state);
        }

        let head = self.send_head(&state).await?;
        match head.content_length() {
            Some(total) => {
                state.offset = spec.offset_in(total);
                debug!(url, total, offset = state.offset, "starting from end");
            }
            None => {
                warn!(
                    url,
                    status = head.status,
                    "remote size unknown, fetching from the beginning"
                );
            }
        }
        Ok(state)
    }
}
