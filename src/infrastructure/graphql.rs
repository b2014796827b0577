use crate::domain::ports::TransferGateway;
use crate::domain::transfer::{SubmissionOutcome, TransferMode, TransferRequest};
use crate::error::{Result, TransferError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

const INITIATE_TRANSFERS_MUTATION: &str = r#"
mutation InitiateCreditTransfers($input: InitiateCreditTransfersInput!) {
  initiateCreditTransfers(input: $input) {
    __typename
    ... on InitiateCreditTransfersSuccessPayload {
      payment {
        id
        statusInfo {
          __typename
          ... on PaymentConsentPending {
            consent {
              consentUrl
            }
          }
        }
      }
    }
    ... on Rejection {
      message
    }
  }
}
"#;

/// HTTP adapter for the credit-transfer initiation mutation.
///
/// Posts the mutation to a GraphQL endpoint and decodes the payment status
/// into a [`SubmissionOutcome`]. Rejection payloads and top-level GraphQL
/// errors become [`TransferError::Rejection`]; transport failures surface as
/// [`TransferError::Http`]. Timeouts are the transport's concern and can be
/// configured on the injected `reqwest::Client`.
pub struct GraphqlGateway {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GraphqlGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: None,
        }
    }

    /// Authenticates requests with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Uses a preconfigured client (proxies, timeouts).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl TransferGateway for GraphqlGateway {
    async fn submit(&self, request: &TransferRequest) -> Result<SubmissionOutcome> {
        let body = serde_json::json!({
            "query": INITIATE_TRANSFERS_MUTATION,
            "variables": { "input": WireInput::from(request) },
        });

        let mut http = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            http = http.bearer_auth(token);
        }

        debug!(endpoint = %self.endpoint, "posting credit transfer initiation");
        let response = http.send().await?.error_for_status()?;
        let wire: WireResponse = response.json().await?;

        if let Some(error) = wire.errors.into_iter().next() {
            return Err(TransferError::Rejection {
                kind: "GraphqlError".to_string(),
                message: error.message,
            });
        }

        let data = wire.data.ok_or_else(|| {
            TransferError::Validation("response carried neither data nor errors".to_string())
        })?;
        decode_payload(data.initiate_credit_transfers)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireInput {
    account_id: String,
    consent_redirect_url: String,
    credit_transfers: Vec<WireTransfer>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTransfer {
    amount: WireAmount,
    mode: TransferMode,
    sepa_beneficiary: WireBeneficiary,
}

#[derive(Serialize)]
struct WireAmount {
    value: Decimal,
    currency: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireBeneficiary {
    name: String,
    save: bool,
    iban: String,
    is_my_own_iban: bool,
}

impl From<&TransferRequest> for WireInput {
    fn from(request: &TransferRequest) -> Self {
        Self {
            account_id: request.account_id.clone(),
            consent_redirect_url: request.consent_redirect_url.clone(),
            credit_transfers: vec![WireTransfer {
                amount: WireAmount {
                    value: request.amount.value,
                    currency: request.amount.currency.clone(),
                },
                mode: request.mode,
                sepa_beneficiary: WireBeneficiary {
                    name: request.beneficiary.name.clone(),
                    save: request.beneficiary.persist_for_reuse,
                    iban: request.beneficiary.iban.clone(),
                    is_my_own_iban: request.beneficiary.is_self_owned,
                },
            }],
        }
    }
}

#[derive(Deserialize)]
struct WireResponse {
    data: Option<WireData>,
    #[serde(default)]
    errors: Vec<WireGraphqlError>,
}

#[derive(Deserialize)]
struct WireGraphqlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireData {
    initiate_credit_transfers: WirePayload,
}

#[derive(Deserialize)]
struct WirePayload {
    #[serde(rename = "__typename")]
    typename: String,
    payment: Option<WirePayment>,
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePayment {
    id: String,
    status_info: WireStatusInfo,
}

#[derive(Deserialize)]
struct WireStatusInfo {
    #[serde(rename = "__typename")]
    typename: String,
    consent: Option<WireConsent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireConsent {
    consent_url: String,
}

fn decode_payload(payload: WirePayload) -> Result<SubmissionOutcome> {
    match payload.typename.as_str() {
        "InitiateCreditTransfersSuccessPayload" => {
            let payment = payload.payment.ok_or_else(|| {
                TransferError::Validation("success payload without payment".to_string())
            })?;
            Ok(decode_status(payment.id, payment.status_info))
        }
        rejection => Err(TransferError::Rejection {
            kind: rejection.to_string(),
            message: payload
                .message
                .unwrap_or_else(|| "The transfer was not accepted".to_string()),
        }),
    }
}

/// Maps the server's payment status tag onto a [`SubmissionOutcome`].
///
/// The three tags are the complete set the workflow can resolve. A tag
/// outside that set means the server contract moved without this decoder;
/// it panics so a new status cannot be silently dropped.
fn decode_status(payment_id: String, status: WireStatusInfo) -> SubmissionOutcome {
    match status.typename.as_str() {
        "PaymentInitiated" => SubmissionOutcome::Initiated { payment_id },
        "PaymentRejected" => SubmissionOutcome::Rejected { payment_id },
        "PaymentConsentPending" => match status.consent {
            Some(consent) => SubmissionOutcome::ConsentPending {
                payment_id,
                consent_url: consent.consent_url,
            },
            None => panic!("PaymentConsentPending status without a consent object"),
        },
        unknown => panic!("unrecognised payment status `{unknown}`"),
    }
}
