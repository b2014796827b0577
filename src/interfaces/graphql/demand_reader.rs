use crate::domain::demand::{PageInfo, PendingDemand};
use crate::error::{Result, TransferError};
use serde::Deserialize;
use std::io::Read;

/// Reads pending demands from a GraphQL connection document.
///
/// The listing collaborator delivers the account's pending demands as a
/// transactions connection (edges of nodes plus page info). This reader
/// accepts that document from any `Read` source, with or without the
/// top-level `data` envelope, and maps the node fields onto
/// [`PendingDemand`] records.
pub struct DemandReader<R: Read> {
    source: R,
}

impl<R: Read> DemandReader<R> {
    /// Creates a new `DemandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Reads and decodes the whole document.
    ///
    /// Demand order is the listing order; pagination metadata is passed
    /// through untouched.
    pub fn read(mut self) -> Result<(Vec<PendingDemand>, PageInfo)> {
        let mut raw = String::new();
        self.source.read_to_string(&mut raw)?;
        let document: WireDocument = serde_json::from_str(&raw)?;

        let account = match (document.data, document.account) {
            (Some(query), _) => query.account,
            (None, Some(account)) => account,
            (None, None) => {
                return Err(TransferError::Validation(
                    "document carries no account".to_string(),
                ));
            }
        };

        let connection = account.transactions;
        let demands = connection.edges.into_iter().map(|edge| edge.node).collect();
        Ok((demands, connection.page_info))
    }
}

#[derive(Deserialize)]
struct WireDocument {
    data: Option<WireQuery>,
    account: Option<WireAccount>,
}

#[derive(Deserialize)]
struct WireQuery {
    account: WireAccount,
}

#[derive(Deserialize)]
struct WireAccount {
    transactions: WireConnection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireConnection {
    page_info: PageInfo,
    edges: Vec<WireEdge>,
}

#[derive(Deserialize)]
struct WireEdge {
    node: PendingDemand,
}
