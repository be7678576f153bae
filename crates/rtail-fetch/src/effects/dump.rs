use std::io::{self, Write};
use std::sync::Mutex;

use crate::effects::http::ResponseHead;

/// Verbatim trace of request and response header blocks.
///
/// Output failures are swallowed: the trace only observes the exchange.
pub struct HeaderDump {
    out: Mutex<Box<dyn Write + Send>>,
}

impl HeaderDump {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    pub fn request(&self, method: &str, url: &str, headers: &[(String, String)]) {
        self.write(|out| {
            writeln!(out, "\n-- REQUEST: {method} {url}")?;
            writeln!(out, "-- REQUEST HEADERS BEGIN --")?;
            for (name, value) in headers {
                writeln!(out, "{name}: {value}")?;
            }
            writeln!(out, "-- REQUEST HEADERS END --\n")
        });
    }

    pub fn response(&self, head: &ResponseHead) {
        self.write(|out| {
            writeln!(out, "-- RESPONSE: {}", head.status_line)?;
            writeln!(out, "-- RESPONSE HEADERS BEGIN --")?;
            for (name, value) in &head.headers {
                writeln!(out, "{name}: {value}")?;
            }
            writeln!(out, "-- RESPONSE HEADERS END --\n")
        });
    }

    fn write(&self, block: impl FnOnce(&mut dyn Write) -> io::Result<()>) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = block(&mut **out).and_then(|()| out.flush());
    }
}

impl std::fmt::Debug for HeaderDump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderDump").finish_non_exhaustive()
    }
}
