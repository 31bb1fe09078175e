use std::{fmt, sync::Arc};

use crate::{
    api::{PredictRequest, PredictResponse, PredictionResult},
    config::ClientConfig,
    error::PredictError,
    form::FormData,
    http::{HttpTransport, ReqwestTransport},
};

/// Talks to the remote churn prediction service.
///
/// Every call to [`predict`](Self::predict) issues exactly one request: there
/// are no retries, timeouts or caching.
#[derive(Clone)]
pub struct PredictionClient {
    config: ClientConfig,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PredictionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl PredictionClient {
    /// Creates a client that reaches the service over http or https.
    ///
    /// The base URL is only checked when a prediction is requested.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::default()))
    }

    /// Creates a client on top of a custom transport.
    pub fn with_transport(config: &ClientConfig, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: config.clone(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submits the form and interprets the answer.
    ///
    /// # Arguments
    /// * `form` - The current form values.
    ///
    /// # Returns
    /// The churn classification, or the error the service reported.
    ///
    /// # Errors
    /// * `PredictError::InvalidForm` if a value cannot be converted, before any request.
    /// * `PredictError::InvalidConfig` if the base URL cannot be used, before any request.
    /// * `PredictError::Server` if the body carries an `error` field.
    /// * `PredictError::Transport` if no usable response came back.
    pub async fn predict(&self, form: &FormData) -> Result<PredictionResult, PredictError> {
        let request = PredictRequest::try_from(form)?;
        let body = request.to_json()?;
        let endpoint = self.config.predict_endpoint()?;

        log::debug!("POST {endpoint}: {}", String::from_utf8_lossy(&body));

        let response = self.http.post_json(&endpoint, &body).await?;

        log::debug!(
            "status {}: {}",
            response.status,
            String::from_utf8_lossy(&response.body)
        );

        PredictResponse::from_slice(&response.body)?.into_result()
    }
}
