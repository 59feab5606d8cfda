use super::{random_bytes, rng, signer};
use crate::batch_ref::{
    self, CENTRALIZED_BATCH_HEADER_ID, CENTRALIZED_REF_LEN, DAC_BATCH_HEADER_ID, DAC_REF_LEN,
};
use crate::hash_to_curve::content_hash;
use crate::{BatchRef, CommitteeRef, DacError, Mask};

fn committee_ref() -> CommitteeRef {
    let data_hash = content_hash(b"some batch");
    CommitteeRef {
        data_hash,
        signature: signer(0).sign(&data_hash).to_bytes(),
        mask: Mask::from_bits(0x0102_0304_0506_0708),
    }
}

fn is_format_error<T: std::fmt::Debug>(res: crate::Result<T>) -> bool {
    matches!(res, Err(DacError::Format(_)))
}

#[test]
fn test_committee_ref_layout() {
    let r = committee_ref();
    let bytes = r.encode();
    assert_eq!(bytes.len(), DAC_REF_LEN);
    assert_eq!(bytes.len(), 137);
    assert_eq!(bytes[0], DAC_BATCH_HEADER_ID);
    assert_eq!(bytes[1..33], r.data_hash[..]);
    assert_eq!(bytes[33..129], r.signature[..]);
    assert_eq!(bytes[129..], [1u8, 2, 3, 4, 5, 6, 7, 8][..]);

    assert_eq!(CommitteeRef::decode(&bytes).unwrap(), r);
    assert_eq!(
        batch_ref::decode(&bytes).unwrap(),
        (r.data_hash, r.signature, r.mask)
    );
    assert_eq!(
        batch_ref::encode(DAC_BATCH_HEADER_ID, &r.data_hash, &r.signature, r.mask),
        bytes
    );
}

#[test]
fn test_decode_is_not_content_aware() {
    // any 136 bytes behind the tag decode, verification is a separate step
    let mut rng = rng();
    let mut bytes = vec![DAC_BATCH_HEADER_ID];
    bytes.extend(random_bytes(&mut rng, DAC_REF_LEN - 1));
    let (hash, sig, mask) = batch_ref::decode(&bytes).unwrap();
    assert_eq!(hash[..], bytes[1..33]);
    assert_eq!(sig[..], bytes[33..129]);
    assert_eq!(mask.to_be_bytes()[..], bytes[129..]);
}

#[test]
fn test_committee_ref_decode_failures() {
    let bytes = committee_ref().encode();

    assert!(is_format_error(batch_ref::decode(&[])));
    assert!(is_format_error(batch_ref::decode(&bytes[..32])));
    assert!(is_format_error(batch_ref::decode(&bytes[..DAC_REF_LEN - 1])));
    let mut long = bytes.clone();
    long.push(0);
    assert!(is_format_error(batch_ref::decode(&long)));

    let mut wrong_tag = bytes.clone();
    wrong_tag[0] = CENTRALIZED_BATCH_HEADER_ID;
    assert!(is_format_error(batch_ref::decode(&wrong_tag)));
    wrong_tag[0] = 2;
    assert!(is_format_error(CommitteeRef::decode(&wrong_tag)));
}

#[test]
fn test_batch_ref_dispatch() {
    let r = committee_ref();
    let committee = BatchRef::Committee(r.clone());
    let encoded = committee.encode();
    assert_eq!(encoded, r.encode());
    assert_eq!(BatchRef::decode(&encoded).unwrap(), committee);
    assert_eq!(committee.tag(), DAC_BATCH_HEADER_ID);
    assert_eq!(committee.data_hash(), &r.data_hash);

    let centralized = BatchRef::Centralized {
        data_hash: r.data_hash,
    };
    let encoded = centralized.encode();
    assert_eq!(encoded.len(), CENTRALIZED_REF_LEN);
    assert_eq!(encoded[0], CENTRALIZED_BATCH_HEADER_ID);
    assert_eq!(BatchRef::decode(&encoded).unwrap(), centralized);
    assert_eq!(centralized.data_hash(), &r.data_hash);

    // a committee reference is never read as a centralized one
    assert!(is_format_error(CommitteeRef::decode(&encoded)));
}

#[test]
fn test_batch_ref_decode_failures() {
    assert!(is_format_error(BatchRef::decode(&[])));

    let mut unknown = vec![2u8];
    unknown.extend_from_slice(&[0u8; 32]);
    assert!(is_format_error(BatchRef::decode(&unknown)));

    let mut centralized = vec![CENTRALIZED_BATCH_HEADER_ID];
    centralized.extend_from_slice(&[0u8; 31]);
    assert!(is_format_error(BatchRef::decode(&centralized)));
    centralized.extend_from_slice(&[0u8; 2]);
    assert!(is_format_error(BatchRef::decode(&centralized)));

    let truncated = committee_ref().encode();
    assert!(is_format_error(BatchRef::decode(&truncated[..100])));
}
