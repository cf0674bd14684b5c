//! Wallet service behavior against a mocked node client.
//!
//! Every test constructs its own service and its own client double, so
//! there is no shared fixture state between cases.

use std::collections::HashSet;

use async_trait::async_trait;
use mockall::mock;

use vela_api::{ApiError, BalancePolicy, WalletService};
use vela_client::{Balance, BalancePair, ClientApi, ClientError, TransactionResult, TransactionStatus};
use vela_core::{Transaction, TxInput, TxOutput};

const RAW_ADDRESS: &str = "2GgFvqoyk9RjwVzj8tqfcXVXB4orBwoc9qv";
const RAW_TXID: &str = "bff13a47a98402ecf2d2eee40464959ad26e0ed6047de5709ffb0c0c9fc1fca5";

mock! {
    pub Client {}

    #[async_trait]
    impl ClientApi for Client {
        async fn balance(&self, addresses: &[String]) -> Result<BalancePair, ClientError>;
        async fn inject_transaction(&self, raw_tx_hex: &str) -> Result<String, ClientError>;
        async fn transaction(&self, txid: &str) -> Result<TransactionResult, ClientError>;
    }
}

fn raw_tx_hex() -> String {
    Transaction {
        version: 1,
        lock_time: 0,
        inputs: vec![TxInput {
            txid: [0xA8; 32],
            index: 1,
        }],
        outputs: vec![TxOutput {
            address_hash: [0x60; 20],
            coins: 1_000_000,
            hours: 100,
        }],
    }
    .to_hex()
}

#[test]
fn generate_key_pair_never_empty_and_distinct() {
    let service = WalletService::new(MockClient::new());

    let mut privates = HashSet::new();
    let mut publics = HashSet::new();
    for _ in 0..100 {
        let keys = service.generate_key_pair();
        assert!(!keys.private.is_empty());
        assert!(!keys.public.is_empty());
        privates.insert(keys.private);
        publics.insert(keys.public);
    }
    assert_eq!(privates.len(), 100);
    assert_eq!(publics.len(), 100);
}

#[test]
fn generate_addr_from_fresh_keys() {
    let service = WalletService::new(MockClient::new());
    let keys = service.generate_key_pair();

    let rsp = service.generate_addr(&keys.private).unwrap();
    assert!(!rsp.address.is_empty());

    // Repeated derivation from the same key is identical.
    assert_eq!(rsp, service.generate_addr(&keys.private).unwrap());
}

#[tokio::test]
async fn check_balance_with_injected_policy() {
    struct FixedBalance;

    #[async_trait]
    impl BalancePolicy for FixedBalance {
        async fn check(
            &self,
            _client: &dyn ClientApi,
            _addresses: &[String],
        ) -> Result<BalancePair, ClientError> {
            Ok(BalancePair {
                confirmed: Balance { coins: 10, hours: 1 },
                predicted: Balance::default(),
            })
        }
    }

    let service = WalletService::with_policies(
        MockClient::new(),
        FixedBalance,
        vela_api::NodeTransaction,
    );

    let rsp = service.check_balance(RAW_ADDRESS).await.unwrap();
    assert_eq!(rsp.address, RAW_ADDRESS);
    assert_eq!(rsp.balance, 10);
    assert_eq!(rsp.hours, 1);
}

#[tokio::test]
async fn check_balance_surfaces_only_confirmed() {
    let mut client = MockClient::new();
    client
        .expect_balance()
        .withf(|addresses: &[String]| addresses.len() == 1 && addresses[0] == RAW_ADDRESS)
        .returning(|_| {
            Ok(BalancePair {
                confirmed: Balance { coins: 10, hours: 2 },
                predicted: Balance {
                    coins: 25,
                    hours: 9,
                },
            })
        });

    let service = WalletService::new(client);
    let rsp = service.check_balance(RAW_ADDRESS).await.unwrap();
    assert_eq!(rsp.balance, 10);
    assert_eq!(rsp.hours, 2);
}

#[tokio::test]
async fn check_balance_idempotent_against_idempotent_client() {
    let mut client = MockClient::new();
    client.expect_balance().times(2).returning(|_| {
        Ok(BalancePair {
            confirmed: Balance { coins: 7, hours: 3 },
            predicted: Balance::default(),
        })
    });

    let service = WalletService::new(client);
    let first = service.check_balance(RAW_ADDRESS).await.unwrap();
    let second = service.check_balance(RAW_ADDRESS).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn check_balance_propagates_client_error() {
    let mut client = MockClient::new();
    client
        .expect_balance()
        .returning(|_| Err(ClientError::Rpc("unknown address".into())));

    let service = WalletService::new(client);
    let err = service.check_balance(RAW_ADDRESS).await.unwrap_err();
    assert_eq!(err, ApiError::Client(ClientError::Rpc("unknown address".into())));
}

#[test]
fn sign_transaction_returns_signid() {
    let service = WalletService::new(MockClient::new());
    let keys = service.generate_key_pair();

    let rsp = service
        .sign_transaction(&keys.private, &raw_tx_hex())
        .unwrap();
    assert!(!rsp.signid.is_empty());
}

#[test]
fn sign_transaction_rejects_malformed_key() {
    let service = WalletService::new(MockClient::new());
    let err = service
        .sign_transaction("not-a-key", &raw_tx_hex())
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidKey(_)));
}

#[tokio::test]
async fn inject_transaction_returns_network_txid() {
    let raw = raw_tx_hex();
    let expected = raw.clone();

    let mut client = MockClient::new();
    client
        .expect_inject_transaction()
        .withf(move |raw_tx_hex: &str| raw_tx_hex == expected)
        .returning(|_| Ok(RAW_TXID.to_owned()));

    let service = WalletService::new(client);
    let rsp = service.inject_transaction(&raw).await.unwrap();
    assert_eq!(rsp.transid, RAW_TXID);
}

#[tokio::test]
async fn inject_transaction_propagates_rejection() {
    let mut client = MockClient::new();
    client
        .expect_inject_transaction()
        .returning(|_| Err(ClientError::Rpc("rejected broadcast".into())));

    let service = WalletService::new(client);
    let err = service.inject_transaction(&raw_tx_hex()).await.unwrap_err();
    assert!(matches!(err, ApiError::Client(_)));
}

#[tokio::test]
async fn inject_transaction_rejects_malformed_input() {
    // No expectation set: a client call would panic the mock.
    let service = WalletService::new(MockClient::new());
    let err = service.inject_transaction("feedface").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidTransaction(_)));
}

#[tokio::test]
async fn check_transaction_status_copies_fields_through() {
    let mut client = MockClient::new();
    client
        .expect_transaction()
        .withf(|txid: &str| txid == RAW_TXID)
        .returning(|_| {
            Ok(TransactionResult {
                status: TransactionStatus {
                    confirmed: true,
                    height: 12799,
                    block_seq: 12799,
                },
                time: 99999,
            })
        });

    let service = WalletService::new(client);
    let status = service.check_transaction_status(RAW_TXID).await.unwrap();
    assert!(status.confirmed);
    assert_eq!(status.height, 12799);
    assert_eq!(status.block_seq, 12799);
    assert_eq!(status.timestamp, 99999);
}

#[tokio::test]
async fn check_transaction_status_unconfirmed_is_zeroed() {
    let mut client = MockClient::new();
    client
        .expect_transaction()
        .returning(|_| Ok(TransactionResult::default()));

    let service = WalletService::new(client);
    let status = service.check_transaction_status(RAW_TXID).await.unwrap();
    assert!(!status.confirmed);
    assert_eq!(status.height, 0);
    assert_eq!(status.block_seq, 0);
    assert_eq!(status.timestamp, 0);
}

#[tokio::test]
async fn check_transaction_status_unknown_txid() {
    let mut client = MockClient::new();
    client
        .expect_transaction()
        .returning(|_| Err(ClientError::Rpc("unknown txid".into())));

    let service = WalletService::new(client);
    let err = service.check_transaction_status("ffff").await.unwrap_err();
    assert_eq!(err, ApiError::Client(ClientError::Rpc("unknown txid".into())));
}
