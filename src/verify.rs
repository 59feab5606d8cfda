use crate::dac_err::{DacError, Result};
use crate::hash_to_curve::hash_to_g2;
use crate::{PublicKey, Signature};
use ff::Field;
use pairing::bls12_381::{Bls12, Fq12, G1};
use pairing::{CurveAffine, CurveProjective, Engine};

/// Verifies a compressed signature over `msg` against `pk`.
///
/// A signature that cannot be decoded is a verification error; a well formed
/// signature that does not match is `Ok(false)`.
pub fn verify_message(msg: &[u8], signature: &[u8], pk: &PublicKey) -> Result<bool> {
    let sig = Signature::from_bytes(signature)
        .map_err(|e| DacError::Verification(format!("could not parse signature: {}", e)))?;
    verify_signature(msg, &sig, pk)
}

/// Checks `e(pk, H(m)) == e(g1, sigma)`.
///
/// The identity key never verifies: it is what an empty selection of the
/// committee aggregates to, and it would accept the identity signature.
pub fn verify_signature(msg: &[u8], sig: &Signature, pk: &PublicKey) -> Result<bool> {
    if pk.get_pk().is_zero() {
        return Ok(false);
    }
    let hm = hash_to_g2(msg);

    // to use simultaneous pairing, we compute
    //  e(1/pk, H(m)) * e(g1, sigma) == 1
    let mut neg_pk = pk.get_pk();
    neg_pk.negate();

    let neg_pk = neg_pk.into_affine().prepare();
    let hm = hm.into_affine().prepare();
    let g1 = G1::one().into_affine().prepare();
    let sigma = sig.get_sigma().into_affine().prepare();

    let pairingproduct =
        Bls12::final_exponentiation(&Bls12::miller_loop([(&neg_pk, &hm), (&g1, &sigma)].iter()))
            .ok_or_else(|| DacError::Verification("final exponentiation failed".to_owned()))?;
    Ok(pairingproduct == Fq12::one())
}
