use std::fmt;
use std::str::FromStr;
use serde::Serialize;

use crate::error::FetchError;

/// Blockchain networks the tracker knows how to query
///
/// The textual form (`ethereum`, `bsc`) is what callers pass on the command
/// line and in the `/gas/{network}` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKey {
    /// Ethereum mainnet, priced through Etherscan
    Ethereum,
    /// BNB Smart Chain, priced through BscScan
    Bsc,
}

impl NetworkKey {
    /// Every supported network, in display order
    pub const ALL: [NetworkKey; 2] = [NetworkKey::Ethereum, NetworkKey::Bsc];

    /// Lowercase key used in URLs, CLI arguments and JSON bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKey::Ethereum => "ethereum",
            NetworkKey::Bsc => "bsc",
        }
    }

    /// Upper-case label used in CLI output
    pub fn display_name(&self) -> &'static str {
        match self {
            NetworkKey::Ethereum => "ETHEREUM",
            NetworkKey::Bsc => "BSC",
        }
    }
}

impl fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKey {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        NetworkKey::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| FetchError::UnsupportedNetwork(s.to_string()))
    }
}

/// Oracle endpoint record for a single network
///
/// Holds the base URL of the gas tracker API together with the credential
/// bound to it.
#[derive(Clone, PartialEq, Eq)]
pub struct NetworkEndpoint {
    /// Base API URL, e.g. `https://api.etherscan.io/api`
    pub base_url: String,

    /// API key sent as the `apikey` query parameter
    pub api_key: String,
}

impl NetworkEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

// Keep credentials out of logs
impl fmt::Debug for NetworkEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("NetworkEndpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &api_key)
            .finish()
    }
}
