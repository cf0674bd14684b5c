//! # vela-core
//! Key material, address encoding and raw transaction handling for Vela.
//!
//! Everything here is pure local computation: no networking, no persistence.
//! The [`vela-api`](../vela_api/index.html) service composes these primitives
//! with an RPC client to talk to a node.

pub mod address;
pub mod error;
pub mod keys;
pub mod transaction;

// Re-exports for convenient access
pub use address::{ADDRESS_VERSION, Address};
pub use error::{AddressError, KeyError, TransactionError};
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use transaction::{Signature, Transaction, TxInput, TxOutput, sign_transaction};
