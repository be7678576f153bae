use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rtail_fetch::{
    ClientConfig, Credentials, Mode, Output, ReqwestClient, SizeSpec, TailOptions, Tailer,
};
use tracing::debug;

#[derive(Clone, Debug, Parser)]
#[command(name = "rtail", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Args {
    /// Remote resource to tail
    pub url: String,

    /// User name for basic authentication
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Output appended data as the remote file grows
    #[arg(short, long)]
    pub follow: bool,

    /// With --follow, check for appended data every N seconds
    #[arg(short, long = "sleep-interval", value_name = "N", default_value_t = 5)]
    pub sleep_interval: u64,

    /// Output the last N bytes; use +N to output starting with byte N
    #[arg(short = 'c', long, value_name = "N", default_value = "1K")]
    pub bytes: String,

    /// Write output to the named file instead of stdout
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: String,

    /// Dump request/response headers to stderr
    #[arg(long)]
    pub dump_headers: bool,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Seconds allowed for establishing a connection
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub connect_timeout: u64,
}

impl Args {
    pub fn mode(&self) -> Result<Mode> {
        if self.sleep_interval == 0 {
            bail!("invalid --sleep-interval=0: must be greater than zero");
        }
        if self.follow {
            Ok(Mode::follow(self.sleep_interval)?)
        } else {
            Ok(Mode::Once)
        }
    }

    pub fn output(&self) -> Result<Output> {
        if self.output.is_empty() {
            bail!("invalid --output: must not be empty");
        }
        Ok(Output::from_target(&self.output))
    }

    pub fn options(&self) -> Result<TailOptions> {
        let credentials = self
            .user
            .as_ref()
            .map(|user| Credentials::new(user.as_str(), self.password.as_str()));
        Ok(TailOptions::default()
            .credentials(credentials)
            .user_agent(concat!("rtail/", env!("CARGO_PKG_VERSION")))
            .dump_headers(self.dump_headers)
            .mode(self.mode()?))
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        if self.connect_timeout == 0 {
            bail!("invalid --connect-timeout=0: must be greater than zero");
        }
        Ok(ClientConfig::default()
            .accept_invalid_certs(self.insecure)
            .connect_timeout(Duration::from_secs(self.connect_timeout)))
    }

    pub async fn run(self) -> Result<()> {
        let spec: SizeSpec = self.bytes.parse()?;
        let output = self.output()?;
        let options = self.options()?;
        let client = ReqwestClient::new(&self.client_config()?)?;

        debug!(url = %self.url, %spec, mode = %options.mode, "tailing");
        let tailer = Tailer::new(client, options);
        let shutdown = async {
            // Without a signal handler the run simply continues until killed.
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };
        tailer
            .tail_until(&self.url, spec, &output, shutdown)
            .await
            .with_context(|| format!("tailing {}", self.url))?;
        Ok(())
    }
}
