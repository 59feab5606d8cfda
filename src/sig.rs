// implements the signature structure and signature aggregation
use crate::dac_err::{DacError, Result};
use crate::serdes::{point_from_slice, DacSerDes};
use crate::SIG_LEN;
use pairing::bls12_381::G2;
use pairing::CurveProjective;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A signature is a single `G2` point: `sigma = H(m)^x` for a single member,
/// or the sum of several such points for an aggregate.
#[derive(Clone, Copy)]
pub struct Signature {
    sigma: G2,
}

impl Signature {
    /// Constructing a signature object.
    pub(crate) fn construct(sigma: G2) -> Self {
        Signature { sigma }
    }

    /// Returns the signature element.
    pub(crate) fn get_sigma(&self) -> G2 {
        self.sigma
    }

    /// Decodes a 96 byte compressed G2 point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        point_from_slice::<G2>(bytes, SIG_LEN)
            .map(Signature::construct)
            .map_err(|e| DacError::decode("signature", e))
    }

    /// Compressed encoding of the signature.
    pub fn to_bytes(&self) -> [u8; SIG_LEN] {
        self.sigma.compress()
    }

    /// Decodes a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim_start_matches("0x"))
            .map_err(|e| DacError::decode("signature", e))?;
        Self::from_bytes(&bytes)
    }

    /// Lowercase hex of the compressed encoding, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.to_bytes()[..])
    }

    /// This function aggregates the signatures without checking if a signature is valid or not.
    /// The result only verifies if every input signs the same message;
    /// the caller guarantees this by construction. An empty list aggregates
    /// to the identity.
    pub fn aggregate(sig_list: &[Signature]) -> Signature {
        let mut agg = G2::zero();
        for e in sig_list {
            agg.add_assign(&e.sigma);
        }
        Signature { sigma: agg }
    }
}

/// Sums the signature points, see [`Signature::aggregate`].
pub fn aggregate_signatures(sig_list: &[Signature]) -> Signature {
    Signature::aggregate(sig_list)
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes()[..] == other.to_bytes()[..]
    }
}

impl Eq for Signature {}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Signature({})", hex::encode(&bytes[..8]))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Signature::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
