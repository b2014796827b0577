use crate::domain::ports::{Navigator, Notifier, Route, Toast, TransferGateway};
use crate::domain::transfer::{SubmissionOutcome, TransferRequest};
use crate::error::{Result, TransferError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

#[derive(Clone)]
enum ScriptedResponse {
    Outcome(SubmissionOutcome),
    Rejection { kind: String, message: String },
}

/// A gateway that answers every submission with a scripted response.
///
/// Records the requests it receives and can optionally hold each submission
/// until released, which lets tests observe the in-flight window. Used by
/// the test suite and the CLI offline mode. `Clone` shares the recording.
#[derive(Clone)]
pub struct ScriptedGateway {
    response: ScriptedResponse,
    requests: Arc<Mutex<Vec<TransferRequest>>>,
    hold: Option<Arc<Semaphore>>,
}

impl ScriptedGateway {
    pub fn new(outcome: SubmissionOutcome) -> Self {
        Self {
            response: ScriptedResponse::Outcome(outcome),
            requests: Arc::new(Mutex::new(Vec::new())),
            hold: None,
        }
    }

    /// A gateway that fails every submission with a rejection error.
    pub fn rejecting(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            response: ScriptedResponse::Rejection {
                kind: kind.into(),
                message: message.into(),
            },
            requests: Arc::new(Mutex::new(Vec::new())),
            hold: None,
        }
    }

    /// Holds each submission after recording it until `gate` hands out a
    /// permit (`add_permits`). Start the semaphore at zero.
    pub fn held_by(mut self, gate: Arc<Semaphore>) -> Self {
        self.hold = Some(gate);
        self
    }

    /// Number of submissions that reached the gateway so far.
    pub fn submissions(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<TransferRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TransferGateway for ScriptedGateway {
    async fn submit(&self, request: &TransferRequest) -> Result<SubmissionOutcome> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.hold
            && let Ok(permit) = gate.acquire().await
        {
            permit.forget();
        }

        match &self.response {
            ScriptedResponse::Outcome(outcome) => Ok(outcome.clone()),
            ScriptedResponse::Rejection { kind, message } => Err(TransferError::Rejection {
                kind: kind.clone(),
                message: message.clone(),
            }),
        }
    }
}

/// A navigator that records route changes and external redirects.
///
/// `Clone` shares the underlying recording, so a clone handed to the
/// workflow can be inspected from the test afterwards.
#[derive(Clone)]
pub struct RecordingNavigator {
    origin: String,
    navigations: Arc<Mutex<Vec<Route>>>,
    redirects: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::with_origin("https://banking.example")
    }

    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            navigations: Arc::new(Mutex::new(Vec::new())),
            redirects: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn navigate_to(&self, route: Route) {
        self.navigations.lock().unwrap().push(route);
    }

    fn redirect_externally(&self, url: &str) {
        self.redirects.lock().unwrap().push(url.to_string());
    }
}

/// A notifier that records the toasts it is asked to show.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
