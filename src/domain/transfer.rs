use super::demand::{Amount, PendingDemand};
use crate::error::{Result, TransferError};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub enum TransferMode {
    InstantWithFallback,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferBeneficiary {
    pub name: String,
    pub iban: String,
    pub persist_for_reuse: bool,
    pub is_self_owned: bool,
}

/// A credit-transfer initiation request, derived from a pending demand.
///
/// Never persisted; built fresh for each submission.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub account_id: String,
    pub consent_redirect_url: String,
    pub amount: Amount,
    pub mode: TransferMode,
    pub beneficiary: TransferBeneficiary,
}

/// The classified result of a transfer-initiation attempt.
///
/// Exactly one case applies per submission. The enum is closed: the wire
/// adapter is the only place a server-defined status tag enters the crate,
/// and it asserts fatally on tags outside this set.
#[derive(Debug, PartialEq, Clone)]
pub enum SubmissionOutcome {
    Initiated {
        payment_id: String,
    },
    Rejected {
        payment_id: String,
    },
    ConsentPending {
        payment_id: String,
        consent_url: String,
    },
}

/// Maps a pending demand into a transfer-initiation request.
///
/// Amount and beneficiary name are copied verbatim; no rounding or currency
/// conversion happens here. IBAN format validation belongs to the server,
/// but an absent IBAN or account id is rejected up front.
pub fn build_transfer_request(
    demand: &PendingDemand,
    account_id: &str,
    consent_redirect_url: &str,
) -> Result<TransferRequest> {
    if account_id.is_empty() {
        return Err(TransferError::Validation(
            "Account id must not be empty".to_string(),
        ));
    }
    if demand.beneficiary.iban.is_empty() {
        return Err(TransferError::Validation(
            "Beneficiary IBAN must not be empty".to_string(),
        ));
    }

    Ok(TransferRequest {
        account_id: account_id.to_string(),
        consent_redirect_url: consent_redirect_url.to_string(),
        amount: demand.amount.clone(),
        mode: TransferMode::InstantWithFallback,
        beneficiary: TransferBeneficiary {
            name: demand.beneficiary.name.clone(),
            iban: demand.beneficiary.iban.clone(),
            persist_for_reuse: false,
            is_self_owned: false,
        },
    })
}
