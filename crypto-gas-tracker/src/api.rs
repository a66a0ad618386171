use actix_web::{get, web, HttpResponse};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    error::FetchError,
    fetcher::GasFetcher,
    models::{network::NetworkKey, oracle::GasFeeResponse},
};

/// Endpoint returning the current gas price tiers for a network
///
/// Unknown networks are rejected with 400 before the oracle is contacted;
/// oracle failures are mapped to a status code by `FetchError`.
#[get("/gas/{network}")]
async fn gas_fee(
    fetcher: web::Data<Arc<GasFetcher>>,
    path: web::Path<String>,
) -> Result<HttpResponse, FetchError> {
    let requested = path.into_inner();
    debug!("Gas fee requested for {}", requested);

    let network: NetworkKey = requested.parse()?;
    let gas_fee = fetcher.fetch_quote(network).await?;

    info!("Served gas fee for {}", network);
    Ok(HttpResponse::Ok().json(GasFeeResponse { network, gas_fee }))
}

/// Configure the API routes for the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(gas_fee);
}
