//! Wallet service error taxonomy.
//!
//! Three caller-visible classes: malformed key material, malformed raw
//! transactions, and backend/network failures. The first two are caller
//! mistakes and never worth retrying; the last carries the underlying
//! cause so the caller can decide on retry policy. Nothing is swallowed
//! and nothing panics on a business error.

use thiserror::Error;

use vela_client::ClientError;
use vela_core::{KeyError, TransactionError};

/// Errors returned by [`WalletService`](crate::service::WalletService)
/// operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Caller-supplied key material did not parse.
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Caller-supplied raw transaction did not parse.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(#[from] TransactionError),

    /// The backend call failed or the node rejected the request.
    #[error("client: {0}")]
    Client(#[from] ClientError),
}
