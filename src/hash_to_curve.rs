//! Maps messages onto the signature group.
//!
//! A message is never signed directly. It is first content hashed with
//! Keccak-256, the digest is left padded with 64 zero bytes into a 96 byte
//! block, and the block is hashed onto G2 with the `SSWU_RO` hash-to-curve
//! suite under this crate's domain separation tag.
//!
//! The block goes through hash-to-field before the map, it is not read as a
//! field element. Signatures are therefore only compatible with members
//! running this same pipeline, not with committees that map the padded
//! block onto the curve directly.

use crate::domain_sep::DOM_SEP_HASH_TO_G2;
use crate::{DataHash, DATA_HASH_LEN};
use pairing::bls12_381::G2;
use pairing::hash_to_curve::HashToCurve;
use pairing::hash_to_field::ExpandMsgXmd;
use sha3::{Digest, Keccak256};

/// Length of the zero padding that precedes the content hash.
pub const MSG_PADDING_LEN: usize = 64;

/// Length of the block that is mapped onto the curve.
pub const MSG_BLOCK_LEN: usize = MSG_PADDING_LEN + DATA_HASH_LEN;

/// Keccak-256 of the input. This is also the retrieval key of a batch.
pub fn content_hash(data: &[u8]) -> DataHash {
    let mut out = [0u8; DATA_HASH_LEN];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// Builds `0^64 | keccak256(msg)`.
pub fn message_block(msg: &[u8]) -> [u8; MSG_BLOCK_LEN] {
    let mut block = [0u8; MSG_BLOCK_LEN];
    block[MSG_PADDING_LEN..].copy_from_slice(&content_hash(msg));
    block
}

/// Hashes an arbitrary message into a G2 point.
pub fn hash_to_g2(msg: &[u8]) -> G2 {
    let block = message_block(msg);
    <G2 as HashToCurve<ExpandMsgXmd<sha2::Sha256>>>::hash_to_curve(
        &block[..],
        DOM_SEP_HASH_TO_G2.as_bytes(),
    )
}
