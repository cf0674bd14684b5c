//! # vela-api — wallet service in front of a Vela node.
//!
//! Exposes five operations behind a uniform interface so callers never see
//! the node's wire protocol: key-pair generation, address derivation,
//! balance lookup, transaction signing, transaction injection and
//! transaction-status polling.
//!
//! Balance and status aggregation run through constructor-injected policy
//! strategies ([`policy`]), so behavior can be substituted per service
//! instance without touching the RPC transport. Tests build a service
//! around a stub policy or a mock [`ClientApi`](vela_client::ClientApi);
//! nothing here requires a live node.
//!
//! # Modules
//!
//! - [`error`] — `ApiError` taxonomy
//! - [`policy`] — replaceable balance/transaction strategies and defaults
//! - [`service`] — the `WalletService` orchestrator
//! - [`types`] — normalized response DTOs

pub mod error;
pub mod policy;
pub mod service;
pub mod types;

// Re-exports for convenient access
pub use error::ApiError;
pub use policy::{BalancePolicy, ConfirmedBalance, NodeTransaction, TransactionPolicy};
pub use service::WalletService;
pub use types::{
    AddressResponse, BalanceResponse, InjectResponse, KeyPairResponse, SignResponse,
    StatusResponse,
};
