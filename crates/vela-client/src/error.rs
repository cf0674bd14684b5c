//! Client capability error types.
use thiserror::Error;

/// Errors surfaced by a [`ClientApi`](crate::api::ClientApi) implementation.
///
/// Payloads are plain strings so the enum stays `Clone`/`Eq` for callers
/// and test assertions; the underlying transport errors are not.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The endpoint descriptor could not be turned into a client.
    #[error("endpoint: {0}")] Endpoint(String),
    /// The request never produced an RPC-level reply.
    #[error("transport: {0}")] Transport(String),
    /// The node replied with an application-level error (unknown address,
    /// unknown txid, rejected broadcast).
    #[error("rpc: {0}")] Rpc(String),
}

impl From<jsonrpsee::core::ClientError> for ClientError {
    fn from(err: jsonrpsee::core::ClientError) -> Self {
        match err {
            jsonrpsee::core::ClientError::Call(e) => ClientError::Rpc(e.to_string()),
            other => ClientError::Transport(other.to_string()),
        }
    }
}
