//! Ed25519 key material for the Vela wallet service.
//!
//! Keys cross the service boundary as hex strings, so this module owns the
//! hex round trip in both directions. Uses ed25519-dalek for the underlying
//! Ed25519 implementation and BLAKE3 for the address hash.

use ed25519_dalek::Signer;
use std::fmt;

use crate::error::KeyError;

/// Length of the address hash derived from a public key, in bytes.
pub const ADDRESS_HASH_LEN: usize = 20;

/// Ed25519 secret key, parsed from a caller-supplied hex string.
///
/// Wraps [`ed25519_dalek::SigningKey`]. The secret key is zeroized on drop
/// by the underlying library.
pub struct SecretKey {
    signing_key: ed25519_dalek::SigningKey,
}

impl SecretKey {
    /// Parse a secret key from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let arr = decode_key_hex(s)?;
        Ok(Self {
            signing_key: ed25519_dalek::SigningKey::from_bytes(&arr),
        })
    }

    /// Create a secret key from 32-byte secret key material.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self {
            signing_key: ed25519_dalek::SigningKey::from_bytes(&bytes),
        }
    }

    /// Hex encoding of the raw secret key bytes. Handle with care.
    pub fn to_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// Derive the public key from this secret key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// Sign a message, returning the raw 64-byte Ed25519 signature.
    ///
    /// Ed25519 signing is deterministic: identical (key, message) input
    /// always yields an identical signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Ed25519 public key, the source of address derivation.
#[derive(Clone)]
pub struct PublicKey {
    verifying_key: ed25519_dalek::VerifyingKey,
}

impl PublicKey {
    /// Parse a public key from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let arr = decode_key_hex(s)?;
        let vk = ed25519_dalek::VerifyingKey::from_bytes(&arr)
            .map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { verifying_key: vk })
    }

    /// Get the raw public key bytes (32 bytes).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Hex encoding of the raw public key bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Compute the 20-byte BLAKE3 address hash of this key.
    pub fn address_hash(&self) -> [u8; ADDRESS_HASH_LEN] {
        let digest = blake3::hash(&self.to_bytes());
        let mut out = [0u8; ADDRESS_HASH_LEN];
        out.copy_from_slice(&digest.as_bytes()[..ADDRESS_HASH_LEN]);
        out
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

/// A freshly generated Ed25519 keypair.
pub struct KeyPair {
    secret: SecretKey,
}

impl KeyPair {
    /// Generate a random keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self {
            secret: SecretKey {
                signing_key: ed25519_dalek::SigningKey::generate(&mut csprng),
            },
        }
    }

    /// The secret half of the pair.
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// The public half of the pair.
    pub fn public(&self) -> PublicKey {
        self.secret.public_key()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public())
            .finish_non_exhaustive()
    }
}

/// Decode a hex key string, enforcing the 32-byte key length.
fn decode_key_hex(s: &str) -> Result<[u8; 32], KeyError> {
    let bytes = hex::decode(s).map_err(|_| KeyError::InvalidHex)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| KeyError::InvalidLength {
        expected: 32,
        got: len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_unique() {
        let kp1 = KeyPair::generate();
        let kp2 = KeyPair::generate();
        assert_ne!(kp1.public(), kp2.public());
    }

    #[test]
    fn secret_hex_roundtrip() {
        let kp = KeyPair::generate();
        let hex_str = kp.secret().to_hex();
        let parsed = SecretKey::from_hex(&hex_str).unwrap();
        assert_eq!(parsed.public_key(), kp.public());
    }

    #[test]
    fn public_hex_roundtrip() {
        let pk = KeyPair::generate().public();
        let parsed = PublicKey::from_hex(&pk.to_hex()).unwrap();
        assert_eq!(parsed, pk);
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let err = SecretKey::from_hex("not hex at all").unwrap_err();
        assert_eq!(err, KeyError::InvalidHex);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = SecretKey::from_hex("ab").unwrap_err();
        assert_eq!(
            err,
            KeyError::InvalidLength {
                expected: 32,
                got: 1
            }
        );
    }

    #[test]
    fn public_from_hex_rejects_invalid_point() {
        // About half of all 32-byte values fail Ed25519 point decompression.
        let mut found_invalid = false;
        for i in 0u8..=20 {
            let mut bytes = [0u8; 32];
            bytes[0] = i;
            if PublicKey::from_hex(&hex::encode(bytes)).is_err() {
                found_invalid = true;
                break;
            }
        }
        assert!(found_invalid, "expected some y value in 0..=20 to fail decompression");
    }

    #[test]
    fn sign_deterministic() {
        let secret = SecretKey::from_bytes([7u8; 32]);
        assert_eq!(secret.sign(b"vela"), secret.sign(b"vela"));
    }

    #[test]
    fn address_hash_deterministic() {
        let pk = SecretKey::from_bytes([9u8; 32]).public_key();
        assert_eq!(pk.address_hash(), pk.address_hash());
    }

    #[test]
    fn debug_hides_secret() {
        let kp = KeyPair::generate();
        let debug = format!("{:?}", kp.secret());
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&kp.secret().to_hex()));
    }
}
