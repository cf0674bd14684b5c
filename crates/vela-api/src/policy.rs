//! Replaceable balance and transaction-check strategies.
//!
//! A policy decides how to turn client calls into an aggregated result;
//! the service decides what to surface from it. Policies are injected at
//! service construction and immutable afterwards, so two calls on the same
//! instance always observe the same strategy (no live-replacement race).
//!
//! The defaults ([`ConfirmedBalance`], [`NodeTransaction`]) forward to the
//! client one to one. Alternative aggregation rules (or test stubs that
//! never touch a client) implement the same traits.

use async_trait::async_trait;

use vela_client::{BalancePair, ClientApi, ClientError, TransactionResult};

/// Strategy computing a balance pair for a set of addresses.
#[async_trait]
pub trait BalancePolicy: Send + Sync {
    /// Aggregate a balance for `addresses` using `client`.
    async fn check(
        &self,
        client: &dyn ClientApi,
        addresses: &[String],
    ) -> Result<BalancePair, ClientError>;
}

/// Strategy computing a transaction lookup result for a txid.
#[async_trait]
pub trait TransactionPolicy: Send + Sync {
    /// Look up `txid` using `client`.
    async fn check(
        &self,
        client: &dyn ClientApi,
        txid: &str,
    ) -> Result<TransactionResult, ClientError>;
}

/// Default balance policy: a single `balance` call against the node.
///
/// The service surfaces only the confirmed half of the returned pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmedBalance;

#[async_trait]
impl BalancePolicy for ConfirmedBalance {
    async fn check(
        &self,
        client: &dyn ClientApi,
        addresses: &[String],
    ) -> Result<BalancePair, ClientError> {
        client.balance(addresses).await
    }
}

/// Default transaction policy: a single `transaction` call against the node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeTransaction;

#[async_trait]
impl TransactionPolicy for NodeTransaction {
    async fn check(
        &self,
        client: &dyn ClientApi,
        txid: &str,
    ) -> Result<TransactionResult, ClientError> {
        client.transaction(txid).await
    }
}
