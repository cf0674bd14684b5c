//! # vela-client
//! The client capability boundary between the wallet service and a Vela node.
//!
//! [`ClientApi`] is the contract any backend must satisfy: fetch balances,
//! broadcast a raw transaction, look up a transaction by id. [`NodeClient`]
//! is the concrete JSON-RPC implementation, built once from a [`Node`]
//! endpoint descriptor. The wallet service depends only on the trait, so
//! tests (and alternative backends) substitute their own implementation.

pub mod api;
pub mod error;
pub mod node;
pub mod types;

// Re-exports for convenient access
pub use api::ClientApi;
pub use error::ClientError;
pub use node::NodeClient;
pub use types::{Balance, BalancePair, Node, TransactionResult, TransactionStatus};
