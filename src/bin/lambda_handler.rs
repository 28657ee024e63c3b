//! AWS Lambda handler for the dividend calculators
//!
//! Accepts a JSON request tagged by `operation` (see `dividend_life::service`)
//! and returns the JSON response. The ETF catalog is loaded once per cold
//! start; `ETF_DATA_PATH` overrides its location.

use std::sync::Arc;

use dividend_life::etf::{load_or_fallback, EtfCatalog, DEFAULT_DATA_PATH};
use dividend_life::service::{handle, Request, Response};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn handler(event: LambdaEvent<Request>, catalog: Arc<EtfCatalog>) -> Result<Response, Error> {
    let (request, context) = event.into_parts();
    log::info!("Request {}: {:?}", context.request_id, request);

    match handle(&catalog, request) {
        Ok(response) => Ok(response),
        Err(err) => {
            log::warn!("Request {} failed: {}", context.request_id, err);
            Err(err.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let path = std::env::var("ETF_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let catalog = Arc::new(load_or_fallback(&path));
    log::info!("Serving with {} ETFs from {}", catalog.len(), path);

    run(service_fn(move |event: LambdaEvent<Request>| {
        let catalog = Arc::clone(&catalog);
        async move { handler(event, catalog).await }
    }))
    .await
}
