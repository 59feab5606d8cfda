//! JSON configuration of a committee and of a single member.
//!
//! ```json
//! { "public_keys": ["a0b1...", "..."], "assumed_honest": 1 }
//! ```

use crate::aggregator::required_signatures;
use crate::dac_err::{DacError, Result};
use crate::keyset::KeySet;
use crate::Signer;
use serde::Deserialize;
use std::fmt;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitteeConfig {
    /// Hex compressed G1 keys, in mask bit order.
    pub public_keys: Vec<String>,
    /// How many members are trusted to be honest.
    #[serde(default = "default_assumed_honest")]
    pub assumed_honest: usize,
}

fn default_assumed_honest() -> usize {
    1
}

impl CommitteeConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| DacError::Config(e.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| DacError::Config(e.to_string()))
    }

    pub fn keyset(&self) -> Result<KeySet> {
        KeySet::from_hex_list(&self.public_keys)
    }

    /// `n - assumed_honest + 1`.
    pub fn required_signatures(&self) -> Result<usize> {
        required_signatures(self.public_keys.len(), self.assumed_honest)
    }
}

#[derive(Clone, Deserialize)]
pub struct MemberConfig {
    /// Hex private scalar, `0x` prefix optional.
    pub private_key: String,
}

impl MemberConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| DacError::Config(e.to_string()))
    }

    pub fn signer(&self) -> Result<Signer> {
        Signer::from_hex(&self.private_key)
    }
}

impl fmt::Debug for MemberConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MemberConfig")
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
