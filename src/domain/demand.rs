use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount as supplied by the listing collaborator.
///
/// The `Decimal` keeps the original scale, so a demand listed as `"50.00"`
/// reaches the transfer request as `"50.00"`, not `"50"`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Amount {
    pub value: Decimal,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Beneficiary {
    pub name: String,
    pub iban: String,
}

/// A payment request awaiting the account holder's approval.
///
/// Supplied by the upstream listing; read-only to this crate. Demands leave
/// the list only through an external refresh, never by local mutation.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PendingDemand {
    pub id: String,
    pub amount: Amount,
    pub beneficiary: Beneficiary,
    #[serde(default)]
    pub created_at: String,
}

/// Pagination metadata of the demand listing.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}
