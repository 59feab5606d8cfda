//! The aggregation endpoint: fans a batch out to the committee and folds the
//! members' signatures into one.

use crate::client::Transport;
use crate::dac_err::{DacError, Result};
use crate::member::Attester;
use crate::verify::verify_signature;
use crate::wire::{AggregateResponse, MemberResponse};
use crate::{DataHash, PublicKey, Signature, DATA_HASH_LEN, PK_LEN};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Number of signatures an AnyTrust committee of `members` needs when
/// `assumed_honest` of them are trusted to be honest.
pub fn required_signatures(members: usize, assumed_honest: usize) -> Result<usize> {
    if assumed_honest == 0 || assumed_honest > members {
        return Err(DacError::Config(format!(
            "assumed honest members must be in 1..={}, got {}",
            members, assumed_honest
        )));
    }
    Ok(members - assumed_honest + 1)
}

pub struct Aggregator {
    attesters: Vec<Box<dyn Attester>>,
    required: usize,
}

impl Aggregator {
    pub fn new(attesters: Vec<Box<dyn Attester>>, assumed_honest: usize) -> Result<Self> {
        let required = required_signatures(attesters.len(), assumed_honest)?;
        Ok(Aggregator {
            attesters,
            required,
        })
    }

    pub fn required(&self) -> usize {
        self.required
    }

    /// Collects the members' attestations and aggregates the usable ones.
    ///
    /// A member that fails, answers with undecodable values, or whose
    /// signature does not verify under the key it reports is skipped, so a
    /// broken member cannot spoil the aggregate of the others. Only the
    /// first attestation per public key counts, toward the aggregate and
    /// toward the threshold alike.
    pub fn aggregate(&self, data: &[u8]) -> Result<AggregateResponse> {
        let mut accepted: Vec<(MemberResponse, DataHash, PublicKey, Signature)> = vec![];
        let mut signers: HashSet<[u8; PK_LEN]> = HashSet::new();
        for (i, attester) in self.attesters.iter().enumerate() {
            let response = match attester.attest(data) {
                Ok(r) => r,
                Err(e) => {
                    warn!("member {} could not attest batch: {}", i, e);
                    continue;
                }
            };
            match check_response(&response) {
                Ok((hash, pk, sig)) => {
                    if !signers.insert(pk.to_bytes()) {
                        warn!(
                            "member {} repeats public key {}, dropping its attestation",
                            i, response.public_key
                        );
                        continue;
                    }
                    accepted.push((response, hash, pk, sig))
                }
                Err(e) => warn!("member {} sent an unusable attestation: {}", i, e),
            }
        }

        if accepted.len() < self.required {
            return Err(DacError::NotEnoughSignatures {
                got: accepted.len(),
                required: self.required,
            });
        }
        let data_hash = accepted[0].1;
        if accepted.iter().any(|(_, h, _, _)| *h != data_hash) {
            return Err(DacError::InconsistentDataHash);
        }

        let signatures: Vec<Signature> = accepted.iter().map(|(_, _, _, s)| *s).collect();
        let agg = Signature::aggregate(&signatures);
        debug!(
            "aggregated {} of {} signatures for batch {}",
            signatures.len(),
            self.attesters.len(),
            hex::encode(data_hash)
        );

        Ok(AggregateResponse {
            data_hash: hex::encode(data_hash),
            public_keys: accepted.into_iter().map(|(r, _, _, _)| r.public_key).collect(),
            signature: agg.to_hex(),
        })
    }
}

/// Decodes a member response and checks its signature under the key the
/// member reports.
fn check_response(response: &MemberResponse) -> Result<(DataHash, PublicKey, Signature)> {
    let data_hash = decode_data_hash(&response.data_hash)?;
    let pk = PublicKey::from_hex(&response.public_key)?;
    let sig = Signature::from_hex(&response.signature)?;
    if !verify_signature(&data_hash, &sig, &pk)? {
        return Err(DacError::InvalidBatchSignature);
    }
    Ok((data_hash, pk, sig))
}

pub(crate) fn decode_data_hash(s: &str) -> Result<DataHash> {
    let bytes =
        hex::decode(s.trim_start_matches("0x")).map_err(|e| DacError::decode("data hash", e))?;
    if bytes.len() != DATA_HASH_LEN {
        return Err(DacError::decode(
            "data hash",
            format!("expected {} bytes, got {}", DATA_HASH_LEN, bytes.len()),
        ));
    }
    let mut out = [0u8; DATA_HASH_LEN];
    out.copy_from_slice(&bytes);
    Ok(out)
}

impl Transport for Aggregator {
    fn post_batch(&self, data: &[u8]) -> Result<AggregateResponse> {
        self.aggregate(data)
    }

    /// Asks each member in turn and returns the first copy found.
    fn get_batch(&self, data_hash: &DataHash) -> Result<Vec<u8>> {
        let id = hex::encode(data_hash);
        for (i, attester) in self.attesters.iter().enumerate() {
            match attester.fetch(&id) {
                Ok(data) => {
                    info!("batch {} served by member {}", id, i);
                    return Ok(data);
                }
                Err(e) => debug!("member {} could not serve batch {}: {}", i, id, e),
            }
        }
        Err(DacError::NotFound(id))
    }
}
