use reqwest::Url;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::FetchError,
    models::{
        network::{NetworkEndpoint, NetworkKey},
        oracle::{GasQuote, OracleResponse},
    },
    oracle::{HttpOracleTransport, OracleTransport},
};

/// Gas fee fetcher that turns a network key into a gas quote
///
/// Each lookup performs exactly one oracle request; there is no caching and
/// no retrying.
#[derive(Clone)]
pub struct GasFetcher {
    /// Transport used to reach the oracle
    transport: Arc<dyn OracleTransport>,
    /// Oracle endpoint and credential per network
    networks: HashMap<NetworkKey, NetworkEndpoint>,
}

impl GasFetcher {
    /// Creates a fetcher over an arbitrary transport
    pub fn new(
        transport: Arc<dyn OracleTransport>,
        networks: HashMap<NetworkKey, NetworkEndpoint>,
    ) -> Self {
        Self { transport, networks }
    }

    /// Creates a fetcher backed by the HTTP transport, using the configured timeout
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let transport = HttpOracleTransport::new(config.oracle_timeout)?;
        Ok(Self::new(Arc::new(transport), config.networks.clone()))
    }

    /// Fetch the gas quote for a network given by its textual key
    ///
    /// Unknown keys fail with `UnsupportedNetwork` before any request is made.
    pub async fn fetch_gas(&self, network: &str) -> Result<GasQuote, FetchError> {
        let network: NetworkKey = network.parse()?;
        self.fetch_quote(network).await
    }

    /// Fetch the gas quote for a network
    ///
    /// # Returns
    ///
    /// * `Result<GasQuote, FetchError>` - The price tiers on success, or the failure kind
    #[instrument(skip(self), err)]
    pub async fn fetch_quote(&self, network: NetworkKey) -> Result<GasQuote, FetchError> {
        let url = self.oracle_url(network)?;

        let body = self.transport.get(&url).await.map_err(|e| {
            error!("Oracle request for {} failed: {}", network, e);
            e
        })?;

        let quote = OracleResponse::from_body(&body)?.into_quote()?;
        debug!(
            "Gas quote for {}: safe={} propose={} fast={}",
            network, quote.safe_gas_price, quote.propose_gas_price, quote.fast_gas_price
        );
        Ok(quote)
    }

    /// Build the gas oracle URL for a network
    fn oracle_url(&self, network: NetworkKey) -> Result<Url, FetchError> {
        let endpoint = self
            .networks
            .get(&network)
            .ok_or_else(|| FetchError::UnsupportedNetwork(network.to_string()))?;

        if endpoint.api_key.trim().is_empty() {
            return Err(FetchError::MissingCredential(network.to_string()));
        }

        Url::parse_with_params(
            &endpoint.base_url,
            &[
                ("module", "gastracker"),
                ("action", "gasoracle"),
                ("apikey", endpoint.api_key.as_str()),
            ],
        )
        .map_err(|e| {
            FetchError::Transport(format!("Invalid oracle URL {:?}: {}", endpoint.base_url, e))
        })
    }
}
