//! I/O operations for HTTP tailing.
//!
//! Everything that touches the network, the clock, or the output lives here:
//! the [`HttpClient`] transport seam, the starting-offset probe, the
//! conditional range fetch, and the follow loop that ties them together.

mod clock;
mod dump;
mod fetcher;
mod follow;
mod http;
mod initiator;
mod tailer;

pub use clock::{Clock, SystemClock};
pub use dump::HeaderDump;
pub use follow::Sink;
pub use http::{BoxStream, HttpClient, HttpResponse, ResponseHead};
pub use tailer::Tailer;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
