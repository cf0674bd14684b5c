//! The client capability contract.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::types::{BalancePair, TransactionResult};

/// The capability a Vela backend must provide to the wallet service.
///
/// One implementation per coin backend; [`NodeClient`](crate::node::NodeClient)
/// is the JSON-RPC one. Object safe so the service's policies can work
/// against `&dyn ClientApi`.
#[async_trait]
pub trait ClientApi: Send + Sync {
    /// Fetch the balance pair aggregated over `addresses`.
    async fn balance(&self, addresses: &[String]) -> Result<BalancePair, ClientError>;

    /// Broadcast a raw hex-encoded transaction; returns the network-assigned
    /// transaction id.
    async fn inject_transaction(&self, raw_tx_hex: &str) -> Result<String, ClientError>;

    /// Look up a transaction by id.
    async fn transaction(&self, txid: &str) -> Result<TransactionResult, ClientError>;
}
