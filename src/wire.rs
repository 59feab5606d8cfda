//! JSON bodies exchanged between the client, the aggregation endpoint and
//! the committee members. Every byte field is lowercase hex without `0x`.

use serde::{Deserialize, Serialize};

/// `POST /batch` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBatchRequest {
    pub data: String,
}

/// A single member's answer to a posted batch.
///
/// `public_key` is informational: it lets the aggregator build a mask, it is
/// not a proof that the member owns the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub data_hash: String,
    pub signature: String,
    pub public_key: String,
}

/// The aggregation endpoint's answer to a posted batch.
///
/// The client treats every field as untrusted: trust derives only from the
/// pairing check against its own key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub data_hash: String,
    pub public_keys: Vec<String>,
    pub signature: String,
}

/// `GET /batch/{data_hash}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBatchResponse {
    pub data: String,
}
