use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::io::Write;

use crate::{
    fetcher::GasFetcher,
    models::{network::NetworkKey, oracle::GasQuote},
};

/// Crypto Gas Fee Tracker
#[derive(Debug, Parser)]
#[command(name = "crypto-gas-tracker", version, about = "Crypto Gas Fee Tracker")]
pub struct Cli {
    /// Specify network (ethereum/bsc)
    #[arg(short, long, default_value = "ethereum")]
    pub network: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve gas fees over HTTP at GET /gas/{network}
    Serve,
}

/// Render a quote as the three tier lines printed by the CLI
pub fn render_quote(network: NetworkKey, quote: &GasQuote) -> String {
    format!(
        "Gas Fees for {}:\n  - Low: {} Gwei\n  - Average: {} Gwei\n  - High: {} Gwei\n",
        network.display_name(),
        quote.safe_gas_price,
        quote.propose_gas_price,
        quote.fast_gas_price,
    )
}

/// Fetch the quote for `network` once and write it to `out`
///
/// Errors are returned to the caller, which decides how to report them.
/// Fetch failures keep their `FetchError` so callers can downcast.
pub async fn print_gas_fee<W: Write>(fetcher: &GasFetcher, network: &str, out: &mut W) -> Result<()> {
    let key: NetworkKey = network.parse::<NetworkKey>()?;
    let quote = fetcher.fetch_quote(key).await?;

    out.write_all(render_quote(key, &quote).as_bytes())
        .wrap_err("Failed to write gas fees")?;
    Ok(())
}
