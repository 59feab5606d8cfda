// this is an implementation of data availability committee attestations:
// BLS multi-signatures over curve BLS12-381, public keys in G1 and
// signatures in G2.

extern crate ff;
extern crate pairing_plus as pairing;

pub mod aggregator;
pub mod batch_ref;
pub mod client;
pub mod config;
mod dac_err;
mod domain_sep;
pub mod hash_to_curve;
pub mod keyset;
pub mod mask;
pub mod member;
mod public_key;
pub mod serdes;
mod sig;
mod signer;
pub mod store;
pub mod verify;
pub mod wire;

#[cfg(test)]
mod test;

pub use aggregator::Aggregator;
pub use batch_ref::{BatchRef, CommitteeRef};
pub use client::{DacClient, Transport};
pub use config::{CommitteeConfig, MemberConfig};
pub use dac_err::{DacError, Result};
pub use keyset::{KeySet, MAX_KEYSET_SIZE};
pub use mask::Mask;
pub use member::{Attester, Member};
pub use public_key::PublicKey;
pub use sig::{aggregate_signatures, Signature};
pub use signer::Signer;
pub use store::{BatchStore, MemoryStore};

/// Size of the content hash of a batch.
pub const DATA_HASH_LEN: usize = 32;

/// Size of a compressed public key (a G1 point).
pub const PK_LEN: usize = 48;

/// Size of a compressed signature (a G2 point).
pub const SIG_LEN: usize = 96;

/// Size of a serialized secret scalar.
pub const SCALAR_LEN: usize = 32;

/// Keccak-256 of a batch; the message members sign and the key batches are
/// stored under.
pub type DataHash = [u8; DATA_HASH_LEN];
