use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TailError};

/// Whether a tail run stops after one fetch or keeps polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fetch once and finish.
    #[default]
    Once,

    /// Fetch, wait `interval`, fetch again, until a fetch fails.
    Follow { interval: PollInterval },
}

impl Mode {
    /// Follow mode polling every `seconds` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TailError::InvalidInterval`] when `seconds` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtail_fetch::{Mode, PollInterval};
    ///
    /// assert_eq!(
    ///     Mode::follow(5).unwrap(),
    ///     Mode::Follow { interval: PollInterval::from_secs(5).unwrap() },
    /// );
    /// assert!(Mode::follow(0).is_err());
    /// ```
    pub fn follow(seconds: u64) -> Result<Self> {
        Ok(Mode::Follow {
            interval: PollInterval::from_secs(seconds)?,
        })
    }

    pub fn is_follow(&self) -> bool {
        matches!(self, Mode::Follow { .. })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Once => write!(f, "once"),
            Mode::Follow { interval } => write!(f, "follow every {interval}"),
        }
    }
}

/// A whole, non-zero number of seconds between follow polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollInterval(Duration);

impl PollInterval {
    /// # Errors
    ///
    /// Returns [`TailError::InvalidInterval`] when `seconds` is zero.
    pub fn from_secs(seconds: u64) -> Result<Self> {
        if seconds == 0 {
            return Err(TailError::InvalidInterval);
        }
        Ok(Self(Duration::from_secs(seconds)))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0.as_secs())
    }
}

/// Basic authentication credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Where fetched bytes go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Stdout,

    /// Created if missing, appended to otherwise.
    File(PathBuf),
}

impl Output {
    /// Map a command-line style target to an output: `-` is standard output.
    pub fn from_target(target: &str) -> Self {
        if target == "-" {
            Output::Stdout
        } else {
            Output::File(PathBuf::from(target))
        }
    }
}

/// Configuration for a tail run.
///
/// # Examples
///
/// ```
/// use rtail_fetch::{Credentials, Mode, TailOptions};
///
/// let options = TailOptions::default()
///     .credentials(Some(Credentials::new("ops", "secret")))
///     .user_agent("rtail/1.0")
///     .dump_headers(true)
///     .mode(Mode::follow(10).unwrap());
/// assert!(options.mode.is_follow());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TailOptions {
    /// Basic-auth credentials, sent only when the user name is non-empty.
    pub credentials: Option<Credentials>,

    /// Value of the `User-Agent` header. `None` leaves the transport default.
    pub user_agent: Option<String>,

    /// Write every request and response header block to the diagnostic stream.
    ///
    /// Default: false
    pub dump_headers: bool,

    /// One-shot or follow.
    ///
    /// Default: [`Mode::Once`]
    pub mode: Mode,
}

impl TailOptions {
    #[must_use]
    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn dump_headers(mut self, dump_headers: bool) -> Self {
        self.dump_headers = dump_headers;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Transport timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Time allowed to establish a connection, TLS handshake included.
    ///
    /// Default: 30s
    pub connect: Duration,

    /// TCP keep-alive interval for pooled connections.
    ///
    /// Default: 30s
    pub keep_alive: Duration,

    /// Upper bound for a whole request, body included. `None` means no limit,
    /// which suits large initial transfers.
    ///
    /// Default: None
    pub request: Option<Duration>,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(30),
            keep_alive: Duration::from_secs(30),
            request: None,
        }
    }
}

/// Settings for the production HTTP transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Skip TLS certificate verification.
    ///
    /// Default: false
    pub accept_invalid_certs: bool,

    pub timeouts: Timeouts,
}

impl ClientConfig {
    #[must_use]
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connect = timeout;
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeouts.request = timeout;
        self
    }
}
