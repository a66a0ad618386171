use actix_web::{web, App, HttpServer};
use clap::Parser;
use eyre::{Result, WrapErr};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use crypto_gas_tracker::{
    api,
    cli::{self, Cli, Command},
    config::Config,
    fetcher::GasFetcher,
};

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Builds the gas fetcher
/// 4. Either prints the gas fees for one network or starts the HTTP server
#[actix_web::main] // Actix will build a multithreaded runtime
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep our own logs at info and quiet the dependencies
    let filter = EnvFilter::from_default_env()
        .add_directive("crypto_gas_tracker=info".parse()?)
        .add_directive("actix_web=error".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    // Logs go to stderr so stdout only carries the gas fees
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().wrap_err("Failed to load config")?;
    let fetcher = GasFetcher::from_config(&config).wrap_err("Failed to build gas fetcher")?;

    match cli.command {
        Some(Command::Serve) => serve(config, fetcher).await,
        None => {
            let mut stdout = std::io::stdout();
            if let Err(e) = cli::print_gas_fee(&fetcher, &cli.network, &mut stdout).await {
                eprintln!("Error fetching gas fee for {}: {}", cli.network, e);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Start the HTTP server exposing `GET /gas/{network}`
async fn serve(config: Config, fetcher: GasFetcher) -> Result<()> {
    // Shared read-only between workers
    let fetcher = Arc::new(fetcher);

    info!("Server running on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            // Add logging middleware
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(fetcher.clone()))
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
