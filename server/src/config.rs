//! Command-line and environment configuration.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "HATEOAS todo API server")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every generated link. Defaults to `http://localhost:{port}`.
    #[arg(long, env = "BASE_URL")]
    pub base_url: Option<String>,

    /// Start with an empty store instead of the sample todos.
    #[arg(long, env = "NO_SEED")]
    pub no_seed: bool,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Link prefix with any trailing slash removed, so `{base}/todos` never
    /// doubles the separator.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }

    pub fn seed(&self) -> bool {
        !self.no_seed
    }
}
