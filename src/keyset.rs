//! The committee key set and the mask driven aggregation built on it.

use crate::dac_err::{DacError, Result};
use crate::mask::Mask;
use crate::verify;
use crate::{PublicKey, PK_LEN};
use pairing::bls12_381::G1;
use pairing::CurveProjective;
use std::collections::HashSet;

/// Maximum number of members a mask can address.
pub const MAX_KEYSET_SIZE: usize = 64;

/// An ordered set of committee public keys. Entry `i` owns bit `i` of every
/// mask. Built once per committee configuration and never mutated; a new
/// committee means a new key set.
///
/// It is the caller's duty to make sure every key is unique and that a
/// holder of the corresponding secret key exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<PublicKey>,
}

impl KeySet {
    /// Fails with `KeySetTooLarge` above 64 keys. Keys are neither
    /// deduplicated nor checked for distinctness.
    pub fn new(keys: Vec<PublicKey>) -> Result<Self> {
        if keys.len() > MAX_KEYSET_SIZE {
            return Err(DacError::KeySetTooLarge {
                got: keys.len(),
                max: MAX_KEYSET_SIZE,
            });
        }
        Ok(KeySet { keys })
    }

    /// Builds a key set from compressed encodings.
    pub fn from_bytes_list<B: AsRef<[u8]>>(encoded: &[B]) -> Result<Self> {
        Self::check_size(encoded.len())?;
        let keys = encoded
            .iter()
            .enumerate()
            .map(|(i, b)| PublicKey::from_bytes(b.as_ref()).map_err(|e| indexed(i, e)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(keys)
    }

    /// Builds a key set from hex encodings.
    pub fn from_hex_list<S: AsRef<str>>(encoded: &[S]) -> Result<Self> {
        Self::check_size(encoded.len())?;
        let keys = encoded
            .iter()
            .enumerate()
            .map(|(i, s)| PublicKey::from_hex(s.as_ref()).map_err(|e| indexed(i, e)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(keys)
    }

    fn check_size(len: usize) -> Result<()> {
        if len > MAX_KEYSET_SIZE {
            return Err(DacError::KeySetTooLarge {
                got: len,
                max: MAX_KEYSET_SIZE,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[PublicKey] {
        &self.keys
    }

    pub fn get(&self, index: usize) -> Option<&PublicKey> {
        self.keys.get(index)
    }

    /// The explicit mask with one bit per member.
    pub fn full_mask(&self) -> Mask {
        (0..self.len()).fold(Mask::from_bits(0), |m, i| m.with(i))
    }

    /// Computes the mask of the key set: the i'th bit is set iff the i'th
    /// key of the set is among `candidates`. Keys are compared by their
    /// compressed bytes; order and duplicates in `candidates` are irrelevant,
    /// and candidates outside the committee are ignored.
    ///
    /// If no candidate is a member the result is zero, i.e. `ALL_MEMBERS`.
    pub fn compute_mask(&self, candidates: &[PublicKey]) -> Mask {
        let input: HashSet<[u8; PK_LEN]> = candidates.iter().map(|k| k.to_bytes()).collect();

        let mut mask = Mask::from_bits(0);
        for (i, key) in self.keys.iter().enumerate() {
            if input.contains(&key.to_bytes()) {
                mask = mask.with(i);
            }
        }
        mask
    }

    /// The candidates that are not members of this key set.
    pub fn unknown_keys<'a>(&self, candidates: &'a [PublicKey]) -> Vec<&'a PublicKey> {
        let members: HashSet<[u8; PK_LEN]> = self.keys.iter().map(|k| k.to_bytes()).collect();
        candidates
            .iter()
            .filter(|k| !members.contains(&k.to_bytes()))
            .collect()
    }

    /// Sums every key selected by `mask`. `ALL_MEMBERS` sums the whole set.
    pub fn aggregate(&self, mask: Mask) -> PublicKey {
        let mut agg_pk = G1::zero();
        for (i, key) in self.keys.iter().enumerate() {
            if !mask.selects(i) {
                continue;
            }
            agg_pk.add_assign(&key.get_pk());
        }
        PublicKey::construct(agg_pk)
    }

    /// Verifies `signature` over `msg` against the aggregate of `mask`.
    pub fn verify_message(&self, msg: &[u8], signature: &[u8], mask: Mask) -> Result<bool> {
        let agg_pk = self.aggregate(mask);
        verify::verify_message(msg, signature, &agg_pk)
    }
}

fn indexed(index: usize, e: DacError) -> DacError {
    match e {
        DacError::Decode { what, reason } => DacError::Decode {
            what,
            reason: format!("key {} of the set: {}", index, reason),
        },
        other => other,
    }
}
