use std::future::{self, Future};
use std::pin::pin;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::data::{FetchState, Mode, Output, SizeSpec};
use crate::effects::clock::Clock;
use crate::effects::http::HttpClient;
use crate::effects::tailer::Tailer;
use crate::error::{Result, TailError};

/// An opened output.
pub type Sink = Box<dyn AsyncWrite + Send + Unpin>;

impl Output {
    /// Open the output: standard output, or a file created if missing and
    /// appended to otherwise.
    pub async fn open(&self) -> Result<Sink> {
        match self {
            Output::Stdout => Ok(Box::new(tokio::io::stdout())),
            Output::File(path) => {
                let file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await
                    .map_err(TailError::Sink)?;
                Ok(Box::new(file))
            }
        }
    }
}

impl<C: HttpClient, K: Clock> Tailer<C, K> {
    /// Tail `url` into `output` according to the configured [`Mode`].
    ///
    /// In follow mode this only returns on the first failure.
    pub async fn tail(&self, url: &str, spec: SizeSpec, output: &Output) -> Result<FetchState> {
        self.tail_until(url, spec, output, future::pending::<()>())
            .await
    }

    /// Like [`tail`](Tailer::tail), but a follow run also ends cleanly once
    /// `shutdown` completes, whether it is waiting or in the middle of a
    /// fetch.
    ///
    /// The output is opened after the starting offset is known, so a failed
    /// probe leaves it untouched, and it is flushed on every exit path.
    /// Bytes already written stay written.
    pub async fn tail_until<F>(
        &self,
        url: &str,
        spec: SizeSpec,
        output: &Output,
        shutdown: F,
    ) -> Result<FetchState>
    where
        F: Future<Output = ()>,
    {
        let mut state = self.initiate(url, spec).await?;
        let mut sink = output.open().await?;

        let outcome = self.run_until(&mut state, &mut sink, shutdown).await;
        let released = sink.shutdown().await.map_err(TailError::Sink);

        outcome?;
        released?;
        Ok(state)
    }

    /// The fetch/wait loop over an already initiated state.
    ///
    /// One-shot mode performs exactly one fetch and never polls `shutdown`.
    /// Follow mode fetches, waits for the next tick of a fixed-rate ticker,
    /// and repeats until a fetch fails or `shutdown` completes. A fetch cut
    /// short by `shutdown` is not a failure.
    pub async fn run_until<W, F>(
        &self,
        state: &mut FetchState,
        sink: &mut W,
        shutdown: F,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
        F: Future<Output = ()>,
    {
        let period = match self.options.mode {
            Mode::Once => {
                self.fetch(state, sink).await?;
                return Ok(());
            }
            Mode::Follow { interval } => interval.as_duration(),
        };

        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        ticker.tick().await;

        let mut shutdown = pin!(shutdown);
        loop {
            let interrupted = tokio::select! {
                fetched = self.fetch(state, sink) => {
                    fetched?;
                    false
                }
                () = &mut shutdown => true,
            };
            if interrupted {
                info!(
                    url = state.resource(),
                    offset = state.offset(),
                    "fetch interrupted, stopped following"
                );
                return Ok(());
            }

            tokio::select! {
                _ = ticker.tick() => {
                    debug!(offset = state.offset(), "polling again");
                }
                () = &mut shutdown => {
                    info!(url = state.resource(), offset = state.offset(), "stopped following");
                    return Ok(());
                }
            }
        }
    }
}
