//! Raw transaction wire format and signing.
//!
//! Transactions reach this service as hex-encoded binary blobs produced by
//! the node or by an external builder. The layout is little-endian and
//! length-prefixed:
//!
//! ```text
//! version: u32 | lock_time: u32
//! n_in:  u32 | n_in  x { txid: [u8; 32] | index: u32 }
//! n_out: u32 | n_out x { address_hash: [u8; 20] | coins: u64 | hours: u64 }
//! ```
//!
//! The signing hash commits to the full canonical encoding. Signatures are
//! deterministic Ed25519, so signing the same transaction with the same key
//! always yields the same signature id.

use std::fmt;

use crate::error::TransactionError;
use crate::keys::{ADDRESS_HASH_LEN, SecretKey};

/// Upper bound on inputs per transaction accepted by the parser.
pub const MAX_TX_INPUTS: usize = 1024;

/// Upper bound on outputs per transaction accepted by the parser.
pub const MAX_TX_OUTPUTS: usize = 1024;

/// A reference to a previous transaction output being spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    /// Transaction id of the output being spent.
    pub txid: [u8; 32],
    /// Output index within that transaction.
    pub index: u32,
}

/// A transaction output: recipient address hash plus coins and hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    /// BLAKE3 address hash of the recipient.
    pub address_hash: [u8; ADDRESS_HASH_LEN],
    /// Coins transferred, in base units.
    pub coins: u64,
    /// Hours transferred alongside the coins.
    pub hours: u64,
}

/// A parsed Vela transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Wire format version.
    pub version: u32,
    /// Earliest block height at which the transaction is valid.
    pub lock_time: u32,
    /// Outputs being spent.
    pub inputs: Vec<TxInput>,
    /// Newly created outputs.
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    /// Parse a transaction from its hex-encoded wire form.
    pub fn from_hex(s: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(s).map_err(|_| TransactionError::InvalidHex)?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw wire bytes.
    ///
    /// The whole buffer must be consumed; trailing bytes are rejected so a
    /// blob cannot smuggle data past the signing hash.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut r = Reader::new(bytes);

        let version = r.read_u32()?;
        let lock_time = r.read_u32()?;

        let n_in = r.read_u32()? as usize;
        if n_in > MAX_TX_INPUTS {
            return Err(TransactionError::TooManyInputs {
                count: n_in,
                max: MAX_TX_INPUTS,
            });
        }
        let mut inputs = Vec::with_capacity(n_in);
        for _ in 0..n_in {
            let txid = r.read_array::<32>()?;
            let index = r.read_u32()?;
            inputs.push(TxInput { txid, index });
        }

        let n_out = r.read_u32()? as usize;
        if n_out > MAX_TX_OUTPUTS {
            return Err(TransactionError::TooManyOutputs {
                count: n_out,
                max: MAX_TX_OUTPUTS,
            });
        }
        let mut outputs = Vec::with_capacity(n_out);
        for _ in 0..n_out {
            let address_hash = r.read_array::<ADDRESS_HASH_LEN>()?;
            let coins = r.read_u64()?;
            let hours = r.read_u64()?;
            outputs.push(TxOutput {
                address_hash,
                coins,
                hours,
            });
        }

        if inputs.is_empty() || outputs.is_empty() {
            return Err(TransactionError::EmptyInputsOrOutputs);
        }

        let extra = r.remaining();
        if extra > 0 {
            return Err(TransactionError::TrailingBytes { extra });
        }

        Ok(Self {
            version,
            lock_time,
            inputs,
            outputs,
        })
    }

    /// Serialize this transaction to its canonical wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(
            12 + self.inputs.len() * 36 + self.outputs.len() * (ADDRESS_HASH_LEN + 16) + 4,
        );
        data.extend_from_slice(&self.version.to_le_bytes());
        data.extend_from_slice(&self.lock_time.to_le_bytes());

        data.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            data.extend_from_slice(&input.txid);
            data.extend_from_slice(&input.index.to_le_bytes());
        }

        data.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            data.extend_from_slice(&output.address_hash);
            data.extend_from_slice(&output.coins.to_le_bytes());
            data.extend_from_slice(&output.hours.to_le_bytes());
        }

        data
    }

    /// Hex encoding of the canonical wire bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Compute the signing hash: BLAKE3 over the canonical encoding.
    pub fn signing_hash(&self) -> [u8; 32] {
        *blake3::hash(&self.to_bytes()).as_bytes()
    }
}

/// A detached Ed25519 signature over a transaction's signing hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; 64],
}

impl Signature {
    /// The raw 64-byte signature.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.bytes
    }

    /// The signature id: hex-encoded BLAKE3 of the signature bytes.
    ///
    /// Deterministic for identical (key, transaction) input, and the same
    /// shape as a transaction id (64 hex characters).
    pub fn id(&self) -> String {
        hex::encode(blake3::hash(&self.bytes).as_bytes())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.id())
    }
}

/// Sign a transaction's signing hash with a secret key.
pub fn sign_transaction(secret: &SecretKey, tx: &Transaction) -> Signature {
    Signature {
        bytes: secret.sign(&tx.signing_hash()),
    }
}

/// Little-endian cursor over raw transaction bytes.
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], TransactionError> {
        let end = self
            .offset
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(TransactionError::UnexpectedEnd {
                offset: self.offset,
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, TransactionError> {
        let slice = self.take(4)?;
        Ok(u32::from_le_bytes(slice.try_into().expect("4-byte slice")))
    }

    fn read_u64(&mut self) -> Result<u64, TransactionError> {
        let slice = self.take(8)?;
        Ok(u64::from_le_bytes(slice.try_into().expect("8-byte slice")))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], TransactionError> {
        let slice = self.take(N)?;
        Ok(slice.try_into().expect("length checked by take"))
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }
}
