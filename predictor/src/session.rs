use std::io;

use tokio::{
    runtime::Handle,
    sync::oneshot::{self, error::TryRecvError},
};

use crate::{
    api::PredictionResult,
    client::PredictionClient,
    error::PredictError,
    form::{Field, FormData},
};

type Outcome = Result<PredictionResult, PredictError>;

/// A failure the front end must show before the user carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Whether the text came from the service rather than the transport.
    pub server_reported: bool,
}

/// Owned state of one form session: the field values, the request in flight,
/// the last result and the last failure.
///
/// At most one request is outstanding at any time; [`submit`](Self::submit)
/// does nothing while one is.
#[derive(Debug)]
pub struct PredictSession {
    client: PredictionClient,
    runtime: Handle,
    form: FormData,
    result: Option<PredictionResult>,
    notice: Option<Notice>,
    pending: Option<oneshot::Receiver<Outcome>>,
}

impl PredictSession {
    /// Creates a new `PredictSession` with the default form values.
    ///
    /// # Arguments
    /// * `client` - The client used for every submission.
    /// * `runtime` - Where submissions run.
    pub fn new(client: PredictionClient, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            form: FormData::default(),
            result: None,
            notice: None,
            pending: None,
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Mutable access for widget-level editing (typing, cycling options).
    pub fn form_mut(&mut self) -> &mut FormData {
        &mut self.form
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a prediction for a snapshot of the current form.
    ///
    /// # Returns
    /// `false` without issuing anything if a request is already in flight.
    pub fn submit(&mut self) -> bool {
        if self.pending.is_some() {
            log::debug!("submit ignored, a request is already in flight");
            return false;
        }

        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let form = self.form.clone();

        log::info!("requesting prediction from {}", client.base_url());
        self.runtime.spawn(async move {
            let _ = tx.send(client.predict(&form).await);
        });

        self.pending = Some(rx);
        true
    }

    /// Applies the outcome of the request in flight, if it has finished. Non-blocking.
    ///
    /// # Returns
    /// Whether a request finished during this call.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(Self::lost_task()),
        };

        self.pending = None;
        self.apply(outcome);
        true
    }

    /// Waits for the request in flight, if any, and applies its outcome.
    pub async fn wait(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };

        let outcome = rx.await.unwrap_or_else(|_| Err(Self::lost_task()));
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Ok(result) => {
                log::info!(
                    "prediction: churn={} confidence={}",
                    result.is_likely_to_churn,
                    result.confidence
                );
                self.result = Some(result);
                self.notice = None;
            }
            Err(e) => {
                log::error!("prediction failed: {e}");
                self.notice = Some(Notice {
                    message: e.user_message(),
                    server_reported: e.is_server_reported(),
                });
            }
        }
    }

    fn lost_task() -> PredictError {
        PredictError::Transport(io::Error::other("prediction task ended without a result"))
    }
}
