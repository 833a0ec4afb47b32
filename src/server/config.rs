//! Service configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use super::auth::ApiKeys;
use crate::cli::args::ServeArgs;
use crate::error::{LintError, Result};

/// Environment variable holding comma-separated API keys.
pub const API_KEY_ENV: &str = "CONFIG_LINTER_API_KEY";
/// Port fallback when neither `--port` nor `PORT` is given.
pub const PORT_ENV: &str = "LINTER_SERVER_PORT";
pub const DEFAULT_PORT: u16 = 8080;

/// Resolved settings for `deploylint serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub api_keys: ApiKeys,
}

impl ServerConfig {
    /// Resolve from command-line arguments and the process environment.
    pub fn from_args(args: &ServeArgs) -> Result<Self> {
        Self::resolve(args, |name| std::env::var(name).ok())
    }

    /// Resolve from arguments and an environment lookup.
    pub fn resolve(args: &ServeArgs, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match args.port {
            Some(port) => port,
            None => match env(PORT_ENV).filter(|v| !v.trim().is_empty()) {
                Some(raw) => raw.trim().parse().map_err(|_| LintError::ServerConfig {
                    message: format!("{PORT_ENV} is not a valid port: {raw:?}"),
                })?,
                None => DEFAULT_PORT,
            },
        };

        let api_keys = env(API_KEY_ENV)
            .map(|raw| ApiKeys::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            host: args.host,
            port,
            static_dir: args.static_dir.clone(),
            api_keys,
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
