//! The DAC client: posts batches to the committee, checks the returned
//! aggregate attestation against the locally configured key set, and turns
//! references back into batch bytes.

use crate::aggregator::decode_data_hash;
use crate::batch_ref::{BatchRef, CommitteeRef};
use crate::dac_err::{DacError, Result};
use crate::hash_to_curve::content_hash;
use crate::keyset::KeySet;
use crate::wire::AggregateResponse;
use crate::{DataHash, PublicKey, Signature};
use log::{debug, info, warn};

/// The network side of the protocol. Implementations own their timeouts and
/// retries; the client never retries a rejected attestation.
pub trait Transport {
    /// Posts a batch to the aggregation endpoint.
    fn post_batch(&self, data: &[u8]) -> Result<AggregateResponse>;

    /// Fetches the batch stored under `data_hash`.
    fn get_batch(&self, data_hash: &DataHash) -> Result<Vec<u8>>;
}

pub struct DacClient<T: Transport> {
    transport: T,
    keyset: KeySet,
}

impl<T: Transport> DacClient<T> {
    pub fn new(transport: T, keyset: KeySet) -> Self {
        DacClient { transport, keyset }
    }

    pub fn keyset(&self) -> &KeySet {
        &self.keyset
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts `data` and returns a committee reference once the aggregate
    /// signature verifies.
    ///
    /// The signature is checked against the hash of the bytes this client
    /// submitted, never against the hash the endpoint reports; a differing
    /// report is rejected outright.
    pub fn post_batch(&self, data: &[u8]) -> Result<BatchRef> {
        let data_hash = content_hash(data);
        debug!(
            "posting batch {} ({} bytes)",
            hex::encode(data_hash),
            data.len()
        );
        let response = self.transport.post_batch(data)?;
        let reference = self.verify_response(&data_hash, &response)?;
        info!(
            "batch {} attested, mask {:?}",
            hex::encode(data_hash),
            reference.mask
        );
        Ok(BatchRef::Committee(reference))
    }

    /// Verifies an aggregation endpoint response for content hashing to
    /// `expected_hash`.
    ///
    /// Every reported public key must decode; one bad entry fails the whole
    /// response rather than silently shrinking the signer set.
    pub fn verify_response(
        &self,
        expected_hash: &DataHash,
        response: &AggregateResponse,
    ) -> Result<CommitteeRef> {
        let remote_hash = decode_data_hash(&response.data_hash)?;
        if remote_hash != *expected_hash {
            warn!(
                "aggregation endpoint reported data hash {} for batch {}",
                response.data_hash,
                hex::encode(expected_hash)
            );
            return Err(DacError::DataHashMismatch {
                local: hex::encode(expected_hash),
                remote: response.data_hash.clone(),
            });
        }

        let public_keys = response
            .public_keys
            .iter()
            .enumerate()
            .map(|(i, k)| {
                PublicKey::from_hex(k).map_err(|e| match e {
                    DacError::Decode { what, reason } => DacError::Decode {
                        what,
                        reason: format!("signer public key {}: {}", i, reason),
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let signature = Signature::from_hex(&response.signature)?;

        let unknown = self.keyset.unknown_keys(&public_keys);
        if !unknown.is_empty() {
            warn!(
                "aggregation endpoint reported {} signer(s) outside the committee",
                unknown.len()
            );
        }

        let mask = self.keyset.compute_mask(&public_keys);
        let signature = signature.to_bytes();
        if !self
            .keyset
            .verify_message(expected_hash, &signature, mask)?
        {
            warn!(
                "rejecting aggregate signature for batch {}, mask {:?}",
                hex::encode(expected_hash),
                mask
            );
            return Err(DacError::InvalidBatchSignature);
        }

        Ok(CommitteeRef {
            data_hash: *expected_hash,
            signature,
            mask,
        })
    }

    /// Fetches the batch a committee reference points to. The reference is
    /// not re-verified.
    pub fn get_batch(&self, reference: &[u8]) -> Result<Vec<u8>> {
        let reference = CommitteeRef::decode(reference)?;
        debug!("fetching batch {}", hex::encode(reference.data_hash));
        self.transport.get_batch(&reference.data_hash)
    }
}
