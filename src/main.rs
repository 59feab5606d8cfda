extern crate dac;

use dac::{Aggregator, Attester, DacClient, KeySet, Member, MemoryStore, Signer};
use log::info;

// runs a three member committee in process: post a batch, check the
// attestation, read the batch back through its reference
fn main() -> dac::Result<()> {
    env_logger::init();

    let seeds: [&[u8]; 3] = [
        b"this is a very long seed for dac demo member 0",
        b"this is a very long seed for dac demo member 1",
        b"this is a very long seed for dac demo member 2",
    ];
    let mut public_keys = vec![];
    let mut attesters: Vec<Box<dyn Attester>> = vec![];
    for seed in seeds.iter() {
        let signer = Signer::from_seed(seed)?;
        public_keys.push(signer.public_key());
        attesters.push(Box::new(Member::new(MemoryStore::new(), signer)));
    }

    let keyset = KeySet::new(public_keys)?;
    let aggregator = Aggregator::new(attesters, 1)?;
    let client = DacClient::new(aggregator, keyset);

    let batch = b"rollup batch posted through the demo committee";
    let reference = client.post_batch(batch)?.encode();
    info!("batch reference: {}", hex::encode(&reference));
    println!("{}", hex::encode(&reference));

    let data = client.get_batch(&reference)?;
    assert_eq!(&data[..], &batch[..], "batch retrieved does not match");
    Ok(())
}
