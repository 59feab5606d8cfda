use super::committee;
use super::dac::batch_ref::CommitteeRef;
use super::dac::hash_to_curve::content_hash;
use super::dac::{aggregate_signatures, KeySet, PublicKey, Signature};
use criterion::Criterion;

/// benchmark mask computation over a full key set
#[allow(dead_code)]
fn bench_compute_mask(c: &mut Criterion) {
    let keys: Vec<PublicKey> = committee(64).iter().map(|s| s.public_key()).collect();
    let keyset = KeySet::new(keys.clone()).unwrap();
    let signed: Vec<PublicKey> = keys.into_iter().step_by(2).collect();

    c.bench_function("compute a mask over 64 keys", move |b| {
        b.iter(|| keyset.compute_mask(&signed))
    });
}

/// benchmark verification of a committee reference: decode, aggregate the
/// masked keys, then the pairing check
#[allow(dead_code)]
fn bench_verify_reference(c: &mut Criterion) {
    const MEMBERS: usize = 16;

    let signers = committee(MEMBERS);
    let keyset = KeySet::new(signers.iter().map(|s| s.public_key()).collect()).unwrap();
    let data_hash = content_hash(b"the batch to be signed in benchmarking");
    let siglist: Vec<Signature> = signers.iter().skip(1).map(|s| s.sign(&data_hash)).collect();
    let signed: Vec<PublicKey> = signers.iter().skip(1).map(|s| s.public_key()).collect();
    let reference = CommitteeRef {
        data_hash,
        signature: aggregate_signatures(&siglist).to_bytes(),
        mask: keyset.compute_mask(&signed),
    }
    .encode();

    c.bench_function("verify a committee reference, 15 of 16", move |b| {
        b.iter(|| {
            let r = CommitteeRef::decode(&reference).unwrap();
            let res = keyset.verify_message(&r.data_hash, &r.signature, r.mask);
            assert_eq!(res, Ok(true), "verification failed");
        })
    });
}

criterion_group!(keyset, bench_compute_mask, bench_verify_reference);
