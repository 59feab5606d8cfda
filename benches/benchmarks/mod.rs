extern crate dac;
extern crate rand_core;
extern crate rand_xorshift;

pub mod bench_api;
pub mod bench_keyset;

use self::dac::Signer;

/// A deterministic committee of `n` signers.
pub fn committee(n: usize) -> Vec<Signer> {
    (0..n)
        .map(|i| {
            let seed = format!("this is a very long seed for bench member {:04}", i);
            Signer::from_seed(seed.as_bytes()).unwrap()
        })
        .collect()
}
