//! Incremental HTTP tailing: `tail -f` for remote resources.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration, the size grammar and the fetch state
//! - [`core`] - Pure transformations (dates, request headers, status classes)
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait abstraction
//!
//! # Key Features
//!
//! - **Tail offsets**: `1K` tails the last KiB, `+1K` starts at byte 1024
//! - **Conditional polling**: `If-Modified-Since` and `Expires` avoid needless transfers
//! - **Range fetches**: only bytes past the current offset travel over the wire
//! - **Mechanism-Only**: no retry policy; the first failure ends the run
//!
//! # Example
//!
//! ```no_run
//! use rtail_fetch::{ClientConfig, Mode, Output, ReqwestClient, SizeSpec, TailOptions, Tailer};
//!
//! # async fn run() -> rtail_fetch::Result<()> {
//! let client = ReqwestClient::new(&ClientConfig::default())?;
//! let options = TailOptions::default().mode(Mode::follow(5)?);
//! let tailer = Tailer::new(client, options);
//!
//! let spec: SizeSpec = "4K".parse()?;
//! tailer.tail("https://example.com/app.log", spec, &Output::Stdout).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{
    ClientConfig, Credentials, FetchState, Mode, Output, PollInterval, SizeSpec, TailOptions,
    Timeouts,
};
pub use effects::{BoxStream, Clock, HttpClient, HttpResponse, ResponseHead, SystemClock, Tailer};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{ParseSizeError, Result, TailError};
