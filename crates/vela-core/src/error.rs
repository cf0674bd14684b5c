//! Error types for Vela key, address and transaction handling.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid hex in key material")] InvalidHex,
    #[error("invalid key length: expected {expected} bytes, got {got}")] InvalidLength { expected: usize, got: usize },
    #[error("invalid public key bytes")] InvalidPublicKey,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid base58: {0}")] InvalidBase58(String),
    #[error("invalid address length: {0} bytes")] InvalidLength(usize),
    #[error("invalid checksum")] InvalidChecksum,
    #[error("invalid version: {0}")] InvalidVersion(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("invalid hex in raw transaction")] InvalidHex,
    #[error("unexpected end of raw transaction at byte {offset}")] UnexpectedEnd { offset: usize },
    #[error("trailing bytes after transaction: {extra}")] TrailingBytes { extra: usize },
    #[error("too many inputs: {count} > {max}")] TooManyInputs { count: usize, max: usize },
    #[error("too many outputs: {count} > {max}")] TooManyOutputs { count: usize, max: usize },
    #[error("empty inputs or outputs")] EmptyInputsOrOutputs,
}
