//! Immutable data types for tailing operations.
//!
//! This module contains the size grammar, the configuration values handed to
//! the tailer, and the single mutable [`FetchState`] record that the follow
//! loop threads through every fetch.

pub mod options;
pub mod size;
pub mod state;

pub use options::{ClientConfig, Credentials, Mode, Output, PollInterval, TailOptions, Timeouts};
pub use size::SizeSpec;
pub use state::FetchState;
