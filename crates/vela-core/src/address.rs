//! Base58Check address encoding for the Vela network.
//!
//! An address encodes a version byte and the 20-byte BLAKE3 address hash of
//! an Ed25519 public key, followed by a 4-byte BLAKE3 checksum, all Base58
//! encoded. Derivation is deterministic: the same public key always encodes
//! to the same address string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;
use crate::keys::{ADDRESS_HASH_LEN, PublicKey};

/// Current address version byte.
pub const ADDRESS_VERSION: u8 = 0;

/// Checksum length appended to the address payload.
const CHECKSUM_LEN: usize = 4;

/// A Vela network address: version byte plus pubkey address hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    version: u8,
    hash: [u8; ADDRESS_HASH_LEN],
}

impl Address {
    /// Create an address from a raw address hash.
    pub fn from_hash(hash: [u8; ADDRESS_HASH_LEN]) -> Self {
        Self {
            version: ADDRESS_VERSION,
            hash,
        }
    }

    /// Derive the address for a public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self::from_hash(public_key.address_hash())
    }

    /// The address hash encoded in this address.
    pub fn hash(&self) -> &[u8; ADDRESS_HASH_LEN] {
        &self.hash
    }

    /// The address version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Encode this address as a Base58Check string.
    pub fn encode(&self) -> String {
        let mut payload = Vec::with_capacity(1 + ADDRESS_HASH_LEN + CHECKSUM_LEN);
        payload.push(self.version);
        payload.extend_from_slice(&self.hash);
        let digest = blake3::hash(&payload);
        payload.extend_from_slice(&digest.as_bytes()[..CHECKSUM_LEN]);
        bs58::encode(payload).into_string()
    }

    /// Decode a Base58Check address string.
    pub fn decode(s: &str) -> Result<Self, AddressError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

        if bytes.len() != 1 + ADDRESS_HASH_LEN + CHECKSUM_LEN {
            return Err(AddressError::InvalidLength(bytes.len()));
        }

        let (payload, checksum) = bytes.split_at(1 + ADDRESS_HASH_LEN);
        let digest = blake3::hash(payload);
        if checksum != &digest.as_bytes()[..CHECKSUM_LEN] {
            return Err(AddressError::InvalidChecksum);
        }

        let version = payload[0];
        if version != ADDRESS_VERSION {
            return Err(AddressError::InvalidVersion(version));
        }

        let mut hash = [0u8; ADDRESS_HASH_LEN];
        hash.copy_from_slice(&payload[1..]);
        Ok(Self { version, hash })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}
