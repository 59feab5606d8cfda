use crate::dac_err::{DacError, Result};
use crate::hash_to_curve::content_hash;
use crate::store::BatchStore;
use crate::wire::MemberResponse;
use crate::{PublicKey, Signer};
use log::{debug, info};

/// Anything that can attest to a batch and serve it back: a committee member
/// in process, or a client for a remote one.
pub trait Attester {
    /// Stores `data` and returns a signature over its content hash.
    fn attest(&self, data: &[u8]) -> Result<MemberResponse>;

    /// Returns the batch stored under the hex data hash.
    fn fetch(&self, data_hash: &str) -> Result<Vec<u8>>;
}

/// A committee member: stores batches and signs their content hash as a
/// proof of storage.
pub struct Member<S: BatchStore> {
    store: S,
    signer: Signer,
    // computed once, the signer never changes
    public_key: PublicKey,
}

impl<S: BatchStore> Member<S> {
    pub fn new(store: S, signer: Signer) -> Self {
        let public_key = signer.public_key();
        info!("DAC member ready, public_key {}", public_key.to_hex());
        Member {
            store,
            signer,
            public_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: BatchStore> Attester for Member<S> {
    fn attest(&self, data: &[u8]) -> Result<MemberResponse> {
        if data.is_empty() {
            return Err(DacError::EmptyBatch);
        }
        let data_hash = content_hash(data);
        let data_hash_hex = hex::encode(data_hash);
        self.store.store(&data_hash_hex, data)?;
        debug!("stored batch {} ({} bytes)", data_hash_hex, data.len());

        let signature = self.signer.sign(&data_hash);
        Ok(MemberResponse {
            data_hash: data_hash_hex,
            signature: signature.to_hex(),
            public_key: self.public_key.to_hex(),
        })
    }

    fn fetch(&self, data_hash: &str) -> Result<Vec<u8>> {
        info!("retrieving batch {}", data_hash);
        self.store.fetch(data_hash)
    }
}
