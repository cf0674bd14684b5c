//! The wallet service orchestrator.
//!
//! One [`WalletService`] per coin backend. It owns its client capability
//! and the two policy strategies for its lifetime; reusing the adapter for
//! another coin means instantiating it with that coin's `ClientApi`
//! implementation.

use tracing::debug;

use vela_client::{ClientApi, Node, NodeClient};
use vela_core::{Address, KeyPair, SecretKey, Transaction, sign_transaction};

use crate::error::ApiError;
use crate::policy::{BalancePolicy, ConfirmedBalance, NodeTransaction, TransactionPolicy};
use crate::types::{
    AddressResponse, BalanceResponse, InjectResponse, KeyPairResponse, SignResponse,
    StatusResponse,
};

/// Wallet service in front of one Vela backend.
///
/// Key and signing operations are pure local computation; balance and
/// status operations perform one network round trip through the injected
/// policies. Every operation is independent and safe to retry except
/// [`inject_transaction`](Self::inject_transaction), whose successful
/// return must be treated as terminal (re-broadcast behavior is owned by
/// the backend).
pub struct WalletService<C: ClientApi> {
    client: C,
    balance_policy: Box<dyn BalancePolicy>,
    transaction_policy: Box<dyn TransactionPolicy>,
}

impl WalletService<NodeClient> {
    /// Connect to a node and build a service with the default policies.
    ///
    /// A bad endpoint descriptor is fatal here; no partial service state
    /// is exposed.
    pub fn connect(node: &Node) -> Result<Self, ApiError> {
        Ok(Self::new(NodeClient::new(node)?))
    }
}

impl<C: ClientApi> WalletService<C> {
    /// Build a service around `client` with the default policies.
    pub fn new(client: C) -> Self {
        Self::with_policies(client, ConfirmedBalance, NodeTransaction)
    }

    /// Build a service with explicit policy strategies.
    ///
    /// Policies are fixed for the service's lifetime; substitute behavior
    /// by constructing a new instance, not by mutating a shared one.
    pub fn with_policies(
        client: C,
        balance_policy: impl BalancePolicy + 'static,
        transaction_policy: impl TransactionPolicy + 'static,
    ) -> Self {
        Self {
            client,
            balance_policy: Box::new(balance_policy),
            transaction_policy: Box::new(transaction_policy),
        }
    }

    /// Generate a fresh random keypair.
    ///
    /// Pure local computation; never fails, never returns empty fields.
    pub fn generate_key_pair(&self) -> KeyPairResponse {
        let pair = KeyPair::generate();
        KeyPairResponse {
            private: pair.secret().to_hex(),
            public: pair.public().to_hex(),
        }
    }

    /// Derive the address for a hex-encoded private key.
    ///
    /// Deterministic: the same key always yields the same address.
    pub fn generate_addr(&self, private_hex: &str) -> Result<AddressResponse, ApiError> {
        let secret = SecretKey::from_hex(private_hex)?;
        let address = Address::from_public_key(&secret.public_key());
        Ok(AddressResponse {
            address: address.encode(),
        })
    }

    /// Fetch the confirmed balance for one address.
    ///
    /// Runs the balance policy with a one-element address list and keeps
    /// only the confirmed half of the pair. The address in the response is
    /// the caller's input echoed back, not derived from the node reply.
    pub async fn check_balance(&self, address: &str) -> Result<BalanceResponse, ApiError> {
        let addresses = [address.to_owned()];
        let pair = self.balance_policy.check(&self.client, &addresses).await?;
        Ok(BalanceResponse {
            address: address.to_owned(),
            balance: pair.confirmed.coins,
            hours: pair.confirmed.hours,
        })
    }

    /// Sign a raw transaction with a hex-encoded secret key.
    ///
    /// Both inputs are validated before any cryptography runs. Idempotent:
    /// identical (key, transaction) input yields an identical signid.
    pub fn sign_transaction(
        &self,
        secret_hex: &str,
        raw_tx_hex: &str,
    ) -> Result<SignResponse, ApiError> {
        let secret = SecretKey::from_hex(secret_hex)?;
        let tx = Transaction::from_hex(raw_tx_hex)?;
        let signature = sign_transaction(&secret, &tx);
        Ok(SignResponse {
            signid: signature.id(),
        })
    }

    /// Broadcast a raw transaction to the network.
    ///
    /// The blob is parsed locally first so a malformed payload never
    /// reaches the node. On success the network-assigned id is returned as
    /// is; confirmation is a separate concern, polled via
    /// [`check_transaction_status`](Self::check_transaction_status).
    pub async fn inject_transaction(&self, raw_tx_hex: &str) -> Result<InjectResponse, ApiError> {
        Transaction::from_hex(raw_tx_hex)?;
        let transid = self.client.inject_transaction(raw_tx_hex).await?;
        debug!(%transid, "broadcast accepted");
        Ok(InjectResponse { transid })
    }

    /// Poll the confirmation status of a transaction.
    ///
    /// Backend status fields are copied through unchanged; an id unknown to
    /// the backend surfaces as [`ApiError::Client`].
    pub async fn check_transaction_status(&self, txid: &str) -> Result<StatusResponse, ApiError> {
        let result = self.transaction_policy.check(&self.client, txid).await?;
        Ok(StatusResponse {
            confirmed: result.status.confirmed,
            height: result.status.height,
            block_seq: result.status.block_seq,
            timestamp: result.time,
        })
    }
}
