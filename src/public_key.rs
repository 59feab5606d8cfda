use crate::dac_err::{DacError, Result};
use crate::serdes::{point_from_slice, DacSerDes};
use crate::verify;
use crate::PK_LEN;
use pairing::bls12_381::G1;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The public key structure is a wrapper of a BLS12-381 `G1` point.
///
/// Two public keys are equal iff their compressed encodings are equal.
#[derive(Clone, Copy)]
pub struct PublicKey {
    /// the actual public key element
    pk: G1,
}

impl PublicKey {
    /// Constructing a PublicKey object.
    pub(crate) fn construct(pk: G1) -> Self {
        PublicKey { pk }
    }

    /// Returns the public key element this structure contains.
    pub(crate) fn get_pk(&self) -> G1 {
        self.pk
    }

    /// Decodes a 48 byte compressed G1 point.
    /// Returns a decode error on a wrong length, a point that is not
    /// on the curve, or a point outside the prime order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        point_from_slice::<G1>(bytes, PK_LEN)
            .map(PublicKey::construct)
            .map_err(|e| DacError::decode("public key", e))
    }

    /// Compressed encoding of the key.
    pub fn to_bytes(&self) -> [u8; PK_LEN] {
        self.pk.compress()
    }

    /// Decodes a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim_start_matches("0x"))
            .map_err(|e| DacError::decode("public key", e))?;
        Self::from_bytes(&bytes)
    }

    /// Lowercase hex of the compressed encoding, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.to_bytes()[..])
    }

    /// Verifies `signature` (compressed bytes) over `msg` against this key.
    /// Returns `Ok(false)` for a well formed signature that does not verify.
    pub fn verify_message(&self, msg: &[u8], signature: &[u8]) -> Result<bool> {
        verify::verify_message(msg, signature, self)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes()[..] == other.to_bytes()[..]
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "PublicKey({})", hex::encode(&bytes[..8]))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
