//! Wire DTOs for the node RPC boundary.
//!
//! These mirror the node's JSON payloads one to one. The wallet service
//! normalizes them into its own response shapes; nothing here is
//! interpreted beyond deserialization.

use serde::{Deserialize, Serialize};

/// Endpoint descriptor for a Vela node.
///
/// Consumed once when constructing the concrete client; not retained
/// anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Node host name or IP.
    pub host: String,
    /// Node RPC port.
    pub port: u16,
}

impl Node {
    /// Create a new endpoint descriptor.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The HTTP URL for the node's RPC endpoint.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// A single balance: coins plus time-accrued hours.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    /// Coins in base units.
    pub coins: u64,
    /// Hours accrued alongside the coins.
    pub hours: u64,
}

/// The node's balance view for a set of addresses.
///
/// `confirmed` reflects outputs included in a finalized block; `predicted`
/// additionally counts pending transactions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalancePair {
    /// Balance from confirmed outputs only.
    pub confirmed: Balance,
    /// Balance including unconfirmed (pending) transactions.
    pub predicted: Balance,
}

/// Confirmation state of a transaction as reported by the node.
///
/// `height` and `block_seq` are zero (meaningless) while `confirmed` is
/// false.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionStatus {
    /// Whether the transaction is included in a finalized block.
    pub confirmed: bool,
    /// Number of confirmations.
    pub height: u64,
    /// Sequence number of the containing block.
    pub block_seq: u64,
}

/// A transaction lookup result from the node.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionResult {
    /// Confirmation state.
    pub status: TransactionStatus,
    /// Block timestamp (Unix seconds); zero while unconfirmed.
    pub time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_endpoint_url() {
        let node = Node::new("127.0.0.1", 6430);
        assert_eq!(node.endpoint(), "http://127.0.0.1:6430");
    }

    #[test]
    fn balance_pair_json_shape() {
        let json = r#"{
            "confirmed": { "coins": 10, "hours": 1 },
            "predicted": { "coins": 12, "hours": 2 }
        }"#;
        let pair: BalancePair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.confirmed, Balance { coins: 10, hours: 1 });
        assert_eq!(pair.predicted, Balance { coins: 12, hours: 2 });
    }

    #[test]
    fn transaction_result_json_shape() {
        let json = r#"{
            "status": { "confirmed": true, "height": 12799, "block_seq": 12799 },
            "time": 99999
        }"#;
        let result: TransactionResult = serde_json::from_str(json).unwrap();
        assert!(result.status.confirmed);
        assert_eq!(result.status.height, 12799);
        assert_eq!(result.status.block_seq, 12799);
        assert_eq!(result.time, 99999);
    }
}
