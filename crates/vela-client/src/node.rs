//! JSON-RPC implementation of the client capability.
//!
//! Uses jsonrpsee's HTTP client against the node's RPC endpoint. Method
//! names (`getbalance`, `injecttransaction`, `gettransaction`) are owned by
//! the node's wire protocol, not by this layer.

use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ArrayParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use tracing::debug;

use crate::api::ClientApi;
use crate::error::ClientError;
use crate::types::{BalancePair, Node, TransactionResult};

/// JSON-RPC client for a Vela node.
#[derive(Debug)]
pub struct NodeClient {
    inner: HttpClient,
}

impl NodeClient {
    /// Build a client for the given endpoint descriptor.
    ///
    /// Fails if the descriptor does not form a valid URL; an unreachable
    /// node surfaces later as [`ClientError::Transport`] on the first call.
    pub fn new(node: &Node) -> Result<Self, ClientError> {
        let url = node.endpoint();
        let inner = HttpClientBuilder::default()
            .build(&url)
            .map_err(|e| ClientError::Endpoint(format!("{url}: {e}")))?;
        debug!(%url, "node client constructed");
        Ok(Self { inner })
    }
}

#[async_trait]
impl ClientApi for NodeClient {
    async fn balance(&self, addresses: &[String]) -> Result<BalancePair, ClientError> {
        let mut params = ArrayParams::new();
        params
            .insert(addresses)
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        let pair: BalancePair = self.inner.request("getbalance", params).await?;
        debug!(count = addresses.len(), "fetched balance");
        Ok(pair)
    }

    async fn inject_transaction(&self, raw_tx_hex: &str) -> Result<String, ClientError> {
        let mut params = ArrayParams::new();
        params
            .insert(raw_tx_hex)
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        let txid: String = self.inner.request("injecttransaction", params).await?;
        debug!(%txid, "transaction injected");
        Ok(txid)
    }

    async fn transaction(&self, txid: &str) -> Result<TransactionResult, ClientError> {
        let mut params = ArrayParams::new();
        params
            .insert(txid)
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        let result: TransactionResult = self.inner.request("gettransaction", params).await?;
        Ok(result)
    }
}
