use crate::Signer;
use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;




/// This module tests batch reference encodings.
mod batch_ref;



/// A deterministic signer per index.
pub(crate) fn signer(i: usize) -> Signer {
    let seed = format!("this is a very long seed for dac member {:04}", i);
    Signer::from_seed(seed.as_bytes()).unwrap()
}

pub(crate) fn signers(n: usize) -> Vec<Signer> {
    (0..n).map(signer).collect()
}

pub(crate) fn rng() -> XorShiftRng {
    XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ])
}

pub(crate) fn random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}
