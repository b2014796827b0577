use crate::domain::demand::PendingDemand;
use crate::domain::ports::{
    NavigatorBox, NotifierBox, Route, Toast, ToastVariant, TransferGatewayBox,
};
use crate::domain::selection::SelectionState;
use crate::domain::transfer::{SubmissionOutcome, build_transfer_request};
use crate::error::{Result, TransferError};
use std::collections::HashSet;
use std::fmt;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Terminal state of one approval attempt.
#[derive(Debug, PartialEq, Clone)]
pub enum Resolution {
    Succeeded { payment_id: String },
    Declined { payment_id: String },
    AwaitingExternalConsent { payment_id: String },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Succeeded { payment_id } => {
                write!(f, "transfer initiated (payment {payment_id})")
            }
            Resolution::Declined { payment_id } => {
                write!(f, "transfer rejected (payment {payment_id})")
            }
            Resolution::AwaitingExternalConsent { payment_id } => {
                write!(f, "awaiting external consent (payment {payment_id})")
            }
        }
    }
}

/// The transfer-initiation / consent-resolution workflow.
///
/// `ApprovalWorkflow` owns the collaborator ports and the selection state.
/// Approving a demand builds the transfer request, submits it exactly once
/// through the gateway, and resolves the outcome into the matching side
/// effects: success toast plus navigation, rejection toast, or the external
/// consent redirect.
pub struct ApprovalWorkflow {
    gateway: TransferGatewayBox,
    navigator: NavigatorBox,
    notifier: NotifierBox,
    account_id: String,
    account_membership_id: String,
    selection: RwLock<SelectionState>,
    in_flight: Mutex<HashSet<String>>,
}

impl ApprovalWorkflow {
    /// Creates a new `ApprovalWorkflow` instance.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The mutation collaborator initiating transfers.
    /// * `navigator` - In-app navigation and the external redirect.
    /// * `notifier` - Transient toast notifications.
    /// * `account_id` - The account the transfers are drawn from.
    /// * `account_membership_id` - Membership used for navigation and the
    ///   consent return URL.
    pub fn new(
        gateway: TransferGatewayBox,
        navigator: NavigatorBox,
        notifier: NotifierBox,
        account_id: impl Into<String>,
        account_membership_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            navigator,
            notifier,
            account_id: account_id.into(),
            account_membership_id: account_membership_id.into(),
            selection: RwLock::new(SelectionState::new()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Opens the detail panel for a demand.
    pub async fn select(&self, demand_id: &str) {
        self.selection.write().await.select(demand_id);
    }

    /// Closes the detail panel.
    pub async fn close_detail(&self) {
        self.selection.write().await.clear();
    }

    pub async fn is_selected(&self, demand_id: &str) -> bool {
        self.selection.read().await.is_active(demand_id)
    }

    pub async fn selected(&self) -> Option<String> {
        self.selection.read().await.active().map(str::to_string)
    }

    /// Approves a pending demand by initiating a credit transfer for it.
    ///
    /// Submits once and resolves the outcome. While a submission for the same
    /// demand is in flight, a second call fails fast with
    /// [`TransferError::SubmissionInFlight`] without issuing a request;
    /// distinct demands may overlap. Gateway failures are reported through
    /// the notifier and returned to the caller; the selection is left
    /// untouched so the user can re-attempt.
    pub async fn approve(&self, demand: &PendingDemand) -> Result<Resolution> {
        {
            let mut in_flight = self.in_flight.lock().await;
            if !in_flight.insert(demand.id.clone()) {
                return Err(TransferError::SubmissionInFlight {
                    demand_id: demand.id.clone(),
                });
            }
        }

        let result = self.submit(demand).await;
        self.in_flight.lock().await.remove(&demand.id);

        match result {
            Ok(outcome) => Ok(self.resolve(outcome).await),
            Err(error) => {
                self.report(&error);
                Err(error)
            }
        }
    }

    async fn submit(&self, demand: &PendingDemand) -> Result<SubmissionOutcome> {
        let consent_redirect_url = format!(
            "{}{}",
            self.navigator.origin(),
            Route::PaymentsRoot {
                account_membership_id: self.account_membership_id.clone(),
            }
            .path(),
        );
        let request = build_transfer_request(demand, &self.account_id, &consent_redirect_url)?;

        info!(demand_id = %demand.id, "submitting credit transfer");
        self.gateway.submit(&request).await
    }

    /// Resolves a submission outcome into its side effects.
    ///
    /// The match is exhaustive over the closed outcome enum; a server status
    /// outside this set never reaches here (the wire adapter asserts on it).
    async fn resolve(&self, outcome: SubmissionOutcome) -> Resolution {
        match outcome {
            SubmissionOutcome::Initiated { payment_id } => {
                info!(%payment_id, "transfer initiated");
                self.notifier.notify(Toast {
                    variant: ToastVariant::Success,
                    title: "Transfer initiated".to_string(),
                    description: Some("Your transfer is on its way.".to_string()),
                    auto_close: false,
                });
                self.selection.write().await.clear();
                self.navigator.navigate_to(Route::TransactionsList {
                    account_membership_id: self.account_membership_id.clone(),
                });
                Resolution::Succeeded { payment_id }
            }
            SubmissionOutcome::Rejected { payment_id } => {
                info!(%payment_id, "transfer rejected by the processor");
                self.notifier.notify(Toast {
                    variant: ToastVariant::Error,
                    title: "Transfer rejected".to_string(),
                    description: Some(
                        "The transfer was declined by the payment processor.".to_string(),
                    ),
                    auto_close: true,
                });
                Resolution::Declined { payment_id }
            }
            SubmissionOutcome::ConsentPending {
                payment_id,
                consent_url,
            } => {
                // One-way hand-off: no toast, no polling for the return.
                info!(%payment_id, "consent pending, redirecting");
                self.navigator.redirect_externally(&consent_url);
                Resolution::AwaitingExternalConsent { payment_id }
            }
        }
    }

    fn report(&self, error: &TransferError) {
        warn!(%error, "credit transfer submission failed");
        let (title, description) = describe(error);
        self.notifier.notify(Toast {
            variant: ToastVariant::Error,
            title,
            description: Some(description),
            auto_close: true,
        });
    }
}

/// Derives a human-readable toast title and description from a submission
/// failure.
pub fn describe(error: &TransferError) -> (String, String) {
    match error {
        TransferError::Http(_) => (
            "Network error".to_string(),
            "The transfer could not be sent. Check your connection and try again.".to_string(),
        ),
        TransferError::Rejection { message, .. } => {
            ("Transfer refused".to_string(), message.clone())
        }
        TransferError::Validation(message) => ("Invalid transfer".to_string(), message.clone()),
        TransferError::SubmissionInFlight { .. } => (
            "Transfer already in progress".to_string(),
            "Wait for the current attempt to finish.".to_string(),
        ),
        other => ("Something went wrong".to_string(), other.to_string()),
    }
}
