use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use url::Url;

pub const LISTEN_ADDR_ENV: &str = "BURROW_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "BURROW_PUBLIC_BASE_URL";
pub const LOG_ENDPOINT_ENV: &str = "BURROW_LOG_ENDPOINT";
pub const LOG_TOKEN_ENV: &str = "LOGGING_TOKEN";
pub const LOG_TIMEOUT_ENV: &str = "BURROW_LOG_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "BURROW_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "burrow-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix short links are built on. Defaults to `http://<listen-addr>/api`.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    /// Remote log collector. Remote logging is disabled when unset.
    #[arg(long, env = LOG_ENDPOINT_ENV)]
    pub log_endpoint: Option<Url>,

    /// Collector token, either bare or as `Bearer <token>`.
    #[arg(long, env = LOG_TOKEN_ENV, hide_env_values = true)]
    pub log_token: Option<String>,

    #[arg(long, env = LOG_TIMEOUT_ENV, default_value_t = DEFAULT_LOG_TIMEOUT_SECS)]
    pub log_timeout_secs: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn base_url(&self) -> String {
        self.public_base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}/api", self.listen_addr))
    }
}
