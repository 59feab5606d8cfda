//! Batch references: compact, tagged pointers to off-chain batch data.
//!
//! ```text
//! centralized: < 0 >< data hash (32) >
//! committee:   < 1 >< data hash (32) >< signature (96) >< mask (8, big endian) >
//! ```
//!
//! Both layouts share one payload space and are told apart by the leading tag
//! only, so decoding always dispatches on the tag first.

use crate::dac_err::{DacError, Result};
use crate::mask::{Mask, MASK_LEN};
use crate::{DataHash, DATA_HASH_LEN, SIG_LEN};

/// Tag of a single-hash reference to a centralized store.
pub const CENTRALIZED_BATCH_HEADER_ID: u8 = 0;

/// Tag of a committee attested reference.
pub const DAC_BATCH_HEADER_ID: u8 = 1;

/// Encoded length of a centralized reference.
pub const CENTRALIZED_REF_LEN: usize = 1 + DATA_HASH_LEN;

/// Encoded length of a committee reference.
pub const DAC_REF_LEN: usize = 1 + DATA_HASH_LEN + SIG_LEN + MASK_LEN;

/// A committee attestation: the data hash, the aggregate signature over it,
/// and the mask of the members that produced the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeRef {
    pub data_hash: DataHash,
    pub signature: [u8; SIG_LEN],
    pub mask: Mask,
}

impl CommitteeRef {
    pub fn encode(&self) -> Vec<u8> {
        encode(DAC_BATCH_HEADER_ID, &self.data_hash, &self.signature, self.mask)
    }

    /// Decodes a committee reference; see [`decode`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (data_hash, signature, mask) = decode(bytes)?;
        Ok(CommitteeRef {
            data_hash,
            signature,
            mask,
        })
    }
}

/// Every reference layout this crate understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRef {
    Centralized { data_hash: DataHash },
    Committee(CommitteeRef),
}

impl BatchRef {
    pub fn tag(&self) -> u8 {
        match self {
            BatchRef::Centralized { .. } => CENTRALIZED_BATCH_HEADER_ID,
            BatchRef::Committee(_) => DAC_BATCH_HEADER_ID,
        }
    }

    /// The retrieval key of the referenced batch.
    pub fn data_hash(&self) -> &DataHash {
        match self {
            BatchRef::Centralized { data_hash } => data_hash,
            BatchRef::Committee(r) => &r.data_hash,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            BatchRef::Centralized { data_hash } => {
                let mut data = Vec::with_capacity(CENTRALIZED_REF_LEN);
                data.push(CENTRALIZED_BATCH_HEADER_ID);
                data.extend_from_slice(data_hash);
                data
            }
            BatchRef::Committee(r) => r.encode(),
        }
    }

    /// Dispatches on the leading tag. Unknown tags, empty buffers and
    /// lengths other than the layout's fixed length are format errors.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let tag = *bytes
            .first()
            .ok_or_else(|| DacError::Format("empty batch reference".to_owned()))?;
        match tag {
            CENTRALIZED_BATCH_HEADER_ID => decode_centralized(bytes),
            DAC_BATCH_HEADER_ID => CommitteeRef::decode(bytes).map(BatchRef::Committee),
            other => Err(DacError::Format(format!("unknown batch header {:#04x}", other))),
        }
    }
}

fn decode_centralized(bytes: &[u8]) -> Result<BatchRef> {
    if bytes.len() != CENTRALIZED_REF_LEN {
        return Err(DacError::Format(format!(
            "centralized reference is {} bytes, got {}",
            CENTRALIZED_REF_LEN,
            bytes.len()
        )));
    }
    let mut data_hash = [0u8; DATA_HASH_LEN];
    data_hash.copy_from_slice(&bytes[1..]);
    Ok(BatchRef::Centralized { data_hash })
}

/// Concatenates `tag | data_hash | signature | mask`.
pub fn encode(tag: u8, data_hash: &DataHash, signature: &[u8], mask: Mask) -> Vec<u8> {
    let mut data = Vec::with_capacity(1 + DATA_HASH_LEN + signature.len() + MASK_LEN);
    data.push(tag);
    data.extend_from_slice(data_hash);
    data.extend_from_slice(signature);
    data.extend_from_slice(&mask.to_be_bytes());
    data
}

/// Splits a committee reference into `(data_hash, signature, mask)`.
/// Fails if the buffer is not a committee reference of the fixed length.
pub fn decode(bytes: &[u8]) -> Result<(DataHash, [u8; SIG_LEN], Mask)> {
    if bytes.len() < CENTRALIZED_REF_LEN {
        return Err(DacError::Format(format!(
            "batch reference too short: {} bytes",
            bytes.len()
        )));
    }
    if bytes[0] != DAC_BATCH_HEADER_ID {
        return Err(DacError::Format(format!(
            "invalid DAC batch header {:#04x}",
            bytes[0]
        )));
    }
    if bytes.len() != DAC_REF_LEN {
        return Err(DacError::Format(format!(
            "committee reference is {} bytes, got {}",
            DAC_REF_LEN,
            bytes.len()
        )));
    }

    let sig_start = 1 + DATA_HASH_LEN;
    let mask_start = sig_start + SIG_LEN;

    let mut data_hash = [0u8; DATA_HASH_LEN];
    data_hash.copy_from_slice(&bytes[1..sig_start]);
    let mut signature = [0u8; SIG_LEN];
    signature.copy_from_slice(&bytes[sig_start..mask_start]);
    let mut mask = [0u8; MASK_LEN];
    mask.copy_from_slice(&bytes[mask_start..]);

    Ok((data_hash, signature, Mask::from_be_bytes(mask)))
}
