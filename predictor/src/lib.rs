pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
mod client;
mod session;

pub use client::PredictionClient;
pub use error::PredictError;
pub use session::{Notice, PredictSession};

use api::PredictionResult;
use config::ClientConfig;
use form::FormData;

/// Submits `form` once to the service configured through the environment.
///
/// # Errors
/// Returns a `PredictError` if the base URL is unusable, the form cannot be
/// converted, the service reports an error or the request fails.
pub async fn predict(form: &FormData) -> Result<PredictionResult, PredictError> {
    let config = ClientConfig::from_env();
    log::info!("using prediction service at {}", config.base_url);
    PredictionClient::new(&config).predict(form).await
}
