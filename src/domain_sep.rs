//! This module lists the domain separators used by the committee scheme.

// dst of hash_to_curve used in hash(msg) -> G2
pub const DOM_SEP_HASH_TO_G2: &str = "DAC-BLS12381G2_XMD:SHA-256_SSWU_RO_";

// the salt and info for deriving a signer scalar from a seed
pub const DOM_SEP_SIGNER_SALT: &str = "DAC signer seed extract";
pub const DOM_SEP_SIGNER_INFO: &str = "DAC signer seed expand";
