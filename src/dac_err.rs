//! Error type shared by every layer of the crate.

use thiserror::Error;

/// Errors surfaced by key decoding, committee verification,
/// batch reference decoding and the client/member/aggregator plumbing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DacError {
    /// Malformed key, signature or scalar bytes.
    #[error("could not decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    /// The committee has more members than a mask can address.
    #[error("key set size is {max} maximum, got {got}")]
    KeySetTooLarge { got: usize, max: usize },

    /// Batch reference bytes are truncated or carry an unknown tag.
    #[error("invalid batch reference: {0}")]
    Format(String),

    /// A well formed aggregate failed the pairing check.
    #[error("invalid batch signature")]
    InvalidBatchSignature,

    /// A curve operation could not complete during verification.
    #[error("could not verify signature: {0}")]
    Verification(String),

    /// The aggregation endpoint reported a hash for different content.
    #[error("data hash mismatch: submitted {local}, endpoint reported {remote}")]
    DataHashMismatch { local: String, remote: String },

    /// Committee members reported different hashes for one batch.
    #[error("committee members disagree on the data hash")]
    InconsistentDataHash,

    /// Fewer members attested than the honesty assumption requires.
    #[error("not enough signatures: got {got}, required {required}")]
    NotEnoughSignatures { got: usize, required: usize },

    /// A member was asked to attest to zero bytes.
    #[error("empty batch")]
    EmptyBatch,

    #[error("batch {0} not found")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DacError {
    pub(crate) fn decode<E: std::fmt::Display>(what: &'static str, reason: E) -> Self {
        DacError::Decode {
            what,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DacError>;
