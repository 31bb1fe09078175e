use serde::Deserialize;
use serde_json::Value;

use crate::error::PredictError;

/// Raw body returned by `POST /predict`.
///
/// The service answers either `{"error": ...}` or
/// `{"prediction": 0|1, "confidence": number, "message"?: string}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Churn classification handed back for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub is_likely_to_churn: bool,
    /// Opaque score from the service, displayed as given.
    pub confidence: f64,
    pub message: Option<String>,
}

impl PredictionResult {
    /// The confidence clamped to `0..=100`, for gauges.
    pub fn confidence_percent(&self) -> f64 {
        if self.confidence.is_nan() {
            return 0.0;
        }
        self.confidence.clamp(0.0, 100.0)
    }
}

impl PredictResponse {
    /// Parses a response body.
    ///
    /// # Errors
    /// Returns a transport error if the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, PredictError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Interprets the body as either a result or a server-reported error.
    ///
    /// An `error` field wins over everything else, but only when it carries a
    /// value (an empty string or `null` is ignored).
    ///
    /// # Errors
    /// `PredictError::Server` with the reported text, or a transport error when
    /// neither an error nor a complete prediction is present.
    pub fn into_result(self) -> Result<PredictionResult, PredictError> {
        if let Some(msg) = self.error.as_ref().and_then(reported_error) {
            return Err(PredictError::Server(msg));
        }

        let prediction = self
            .prediction
            .ok_or_else(|| PredictError::malformed("response has no prediction"))?;
        let confidence = self
            .confidence
            .ok_or_else(|| PredictError::malformed("response has no confidence"))?;

        Ok(PredictionResult {
            is_likely_to_churn: prediction == 1.0,
            confidence,
            message: self.message,
        })
    }
}

fn reported_error(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
