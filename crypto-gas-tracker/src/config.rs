use eyre::{Result, WrapErr};
use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::models::network::{NetworkEndpoint, NetworkKey};

/// Default Etherscan gas tracker base URL
pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Default BscScan gas tracker base URL
pub const DEFAULT_BSCSCAN_API_URL: &str = "https://api.bscscan.com/api";

/// Default upper bound for a single oracle request
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 10;

/// Service configuration structure
///
/// Built once at start-up and handed to the fetcher; nothing reads the
/// environment after that.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind the server to (default: 127.0.0.1)
    pub host: String,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Timeout applied to every oracle request
    pub oracle_timeout: Duration,

    /// Oracle endpoint and credential for each supported network
    pub networks: HashMap<NetworkKey, NetworkEndpoint>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// # Environment Variables
    ///
    /// * `HOST` - Server host address (default: "127.0.0.1")
    /// * `PORT` - Server port (default: 3000)
    /// * `ORACLE_TIMEOUT_SECS` - Oracle request timeout (default: 10)
    /// * `ETHERSCAN_API_KEY` / `BSCSCAN_API_KEY` - Oracle credentials
    /// * `ETHERSCAN_API_URL` / `BSCSCAN_API_URL` - Oracle base URL overrides
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .wrap_err_with(|| format!("Invalid PORT value {port:?}"))?,
            None => 3000,
        };

        let timeout_secs = match lookup("ORACLE_TIMEOUT_SECS") {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("Invalid ORACLE_TIMEOUT_SECS value {secs:?}"))?,
            None => DEFAULT_ORACLE_TIMEOUT_SECS,
        };

        let networks = NetworkKey::ALL
            .into_iter()
            .map(|network| {
                let (url_var, key_var, default_url) = env_names(network);
                let endpoint = NetworkEndpoint::new(
                    lookup(url_var).unwrap_or_else(|| default_url.to_string()),
                    lookup(key_var).unwrap_or_default(),
                );
                (network, endpoint)
            })
            .collect();

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            oracle_timeout: Duration::from_secs(timeout_secs),
            networks,
        })
    }
}

/// Environment variable names and default base URL for a network
fn env_names(network: NetworkKey) -> (&'static str, &'static str, &'static str) {
    match network {
        NetworkKey::Ethereum => ("ETHERSCAN_API_URL", "ETHERSCAN_API_KEY", DEFAULT_ETHERSCAN_API_URL),
        NetworkKey::Bsc => ("BSCSCAN_API_URL", "BSCSCAN_API_KEY", DEFAULT_BSCSCAN_API_URL),
    }
}
