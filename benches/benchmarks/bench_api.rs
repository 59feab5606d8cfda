use super::committee;
use super::dac::hash_to_curve::content_hash;
use super::dac::{aggregate_signatures, Signature};
use super::rand_core::{RngCore, SeedableRng};
use super::rand_xorshift::XorShiftRng;
use criterion::Criterion;

/// benchmark signing a data hash
#[allow(dead_code)]
fn bench_sign(c: &mut Criterion) {
    let signer = committee(1).remove(0);
    let mut rng = XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);

    c.bench_function("sign a data hash", move |b| {
        b.iter(|| {
            let mut msg = [0u8; 32];
            rng.fill_bytes(&mut msg);
            signer.sign(&msg)
        })
    });
}

/// benchmark single signature verification
#[allow(dead_code)]
fn bench_verify(c: &mut Criterion) {
    let signer = committee(1).remove(0);
    let msg = content_hash(b"the batch to be signed in benchmarking");
    let sig = signer.sign(&msg).to_bytes();
    let pk = signer.public_key();

    c.bench_function("verify a single signature", move |b| {
        b.iter(|| {
            let res = pk.verify_message(&msg, &sig);
            assert_eq!(res, Ok(true), "verification failed");
        })
    });
}

/// benchmark aggregation of a full committee
#[allow(dead_code)]
fn bench_aggregate(c: &mut Criterion) {
    const SAMPLES: usize = 64;

    let msg = content_hash(b"the batch to be signed in benchmarking");
    let siglist: Vec<Signature> = committee(SAMPLES).iter().map(|s| s.sign(&msg)).collect();

    c.bench_function("aggregate 64 signatures", move |b| {
        b.iter(|| aggregate_signatures(&siglist))
    });
}

criterion_group!(api, bench_sign, bench_verify, bench_aggregate);
