use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use crypto_gas_tracker::{
    config::Config,
    fetcher::GasFetcher,
};
use wiremock::MockServer;

/// Builds a fetcher whose oracle endpoints both point at the mock server.
///
/// Ethereum uses the `/ethereum` path and BSC the `/bsc` path so tests can
/// assert which endpoint was hit.
pub fn fetcher_for(server: &MockServer, timeout: Duration) -> Arc<GasFetcher> {
    fetcher_with_base(&server.uri(), timeout)
}

/// Builds a fetcher pointing at a local port nothing listens on.
pub fn unreachable_fetcher() -> Arc<GasFetcher> {
    // Bind to a free port, then release it
    let listener = TcpListener::bind("127.0.0.1:0").expect("Could not bind to port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    fetcher_with_base(&format!("http://127.0.0.1:{}", port), Duration::from_secs(5))
}

fn fetcher_with_base(base_uri: &str, timeout: Duration) -> Arc<GasFetcher> {
    let vars = HashMap::from([
        ("ETHERSCAN_API_URL".to_string(), format!("{}/ethereum", base_uri)),
        ("BSCSCAN_API_URL".to_string(), format!("{}/bsc", base_uri)),
        ("ETHERSCAN_API_KEY".to_string(), "eth-test-key".to_string()),
        ("BSCSCAN_API_KEY".to_string(), "bsc-test-key".to_string()),
        ("ORACLE_TIMEOUT_SECS".to_string(), timeout.as_secs().to_string()),
    ]);

    let config = Config::from_lookup(|name| vars.get(name).cloned())
        .expect("Failed to build test config");

    Arc::new(GasFetcher::from_config(&config).expect("Failed to build fetcher"))
}
