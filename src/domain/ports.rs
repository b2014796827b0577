use super::transfer::{SubmissionOutcome, TransferRequest};
use crate::error::Result;
use async_trait::async_trait;

/// In-app destinations the workflow can navigate to.
#[derive(Debug, PartialEq, Clone)]
pub enum Route {
    TransactionsList { account_membership_id: String },
    PaymentsRoot { account_membership_id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::TransactionsList {
                account_membership_id,
            } => format!("/accounts/{account_membership_id}/transactions"),
            Route::PaymentsRoot {
                account_membership_id,
            } => format!("/accounts/{account_membership_id}/payments"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ToastVariant {
    Success,
    Error,
}

/// A transient notification shown to the account holder.
#[derive(Debug, PartialEq, Clone)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
    pub auto_close: bool,
}

/// The external mutation collaborator initiating credit transfers.
///
/// One network request per invocation; no implicit retries.
#[async_trait]
pub trait TransferGateway: Send + Sync {
    async fn submit(&self, request: &TransferRequest) -> Result<SubmissionOutcome>;
}

/// Navigation capability: in-app route changes and the one-way full-page
/// redirect used for the external consent hand-off.
pub trait Navigator: Send + Sync {
    /// Origin/base URL the consent provider should return the user to.
    fn origin(&self) -> String;
    fn navigate_to(&self, route: Route);
    fn redirect_externally(&self, url: &str);
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

pub type TransferGatewayBox = Box<dyn TransferGateway>;
pub type NavigatorBox = Box<dyn Navigator>;
pub type NotifierBox = Box<dyn Notifier>;
