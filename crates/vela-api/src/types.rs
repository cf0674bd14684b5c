//! Normalized response DTOs for the wallet service.
//!
//! Plain value types with no shared ownership. Shapes are stable regardless
//! of the backend; the node's wire DTOs never leak past the service.

use serde::{Deserialize, Serialize};

/// A freshly generated keypair, hex encoded.
///
/// Produced per call and never persisted by this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPairResponse {
    /// Secret key as 64 hex characters.
    pub private: String,
    /// Public key as 64 hex characters.
    pub public: String,
}

/// An address derived from a private key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressResponse {
    /// Base58Check-encoded address.
    pub address: String,
}

/// Confirmed balance for one address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    /// The caller-supplied address, echoed back.
    pub address: String,
    /// Confirmed coins in base units.
    pub balance: u64,
    /// Confirmed hours.
    pub hours: u64,
}

/// Result of signing a raw transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignResponse {
    /// Deterministic signature id; non-empty on success.
    pub signid: String,
}

/// Result of broadcasting a raw transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InjectResponse {
    /// The network-assigned transaction id, the handle for later status
    /// checks.
    pub transid: String,
}

/// Normalized confirmation status of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    /// Whether the transaction is included in a finalized block.
    pub confirmed: bool,
    /// Confirmation count; zero while unconfirmed.
    pub height: u64,
    /// Containing block sequence number; zero while unconfirmed.
    pub block_seq: u64,
    /// Block timestamp (Unix seconds); zero while unconfirmed.
    pub timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_response_json_roundtrip() {
        let rsp = BalanceResponse {
            address: "2GgFvqoyk9RjwVzj8tqfcXVXB4orBwoc9qv".into(),
            balance: 10,
            hours: 1,
        };
        let json = serde_json::to_string(&rsp).unwrap();
        let back: BalanceResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(rsp, back);
    }

    #[test]
    fn status_response_field_names() {
        let rsp = StatusResponse {
            confirmed: true,
            height: 12799,
            block_seq: 12799,
            timestamp: 99999,
        };
        let json = serde_json::to_value(&rsp).unwrap();
        assert_eq!(json["block_seq"], 12799);
        assert_eq!(json["timestamp"], 99999);
    }
}
