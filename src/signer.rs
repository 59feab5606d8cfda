use crate::dac_err::{DacError, Result};
use crate::domain_sep::{DOM_SEP_SIGNER_INFO, DOM_SEP_SIGNER_SALT};
use crate::hash_to_curve::hash_to_g2;
use crate::{PublicKey, Signature, SCALAR_LEN};
use ff::{Field, PrimeField, PrimeFieldRepr};
use hkdf::Hkdf;
use pairing::bls12_381::{Fr, FrRepr, G1};
use pairing::CurveProjective;
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use std::fmt;
use zeroize::Zeroize;

/// Minimum seed length accepted by `Signer::from_seed`.
pub const MIN_SEED_LEN: usize = 32;

/// A committee member's signing key.
///
/// The secret scalar is kept as its canonical big endian encoding inside a
/// `Secret`, so it is wiped when the signer is dropped. The public key is
/// computed once at construction.
pub struct Signer {
    sk: Secret<[u8; SCALAR_LEN]>,
    pk: PublicKey,
}

impl Signer {
    /// Builds a signer from a 32 byte big endian scalar.
    /// Returns a decode error if the scalar is zero or not smaller than
    /// the group order.
    pub fn from_secret_scalar(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCALAR_LEN {
            return Err(DacError::decode(
                "secret scalar",
                format!("expected {} bytes, got {}", SCALAR_LEN, bytes.len()),
            ));
        }
        let mut x_sec = scalar_from_be(bytes)?;
        let mut buf = [0u8; SCALAR_LEN];
        buf.copy_from_slice(bytes);

        let mut pk = G1::one();
        pk.mul_assign(x_sec);
        x_sec = Fr::zero();
        debug_assert!(x_sec.is_zero());

        Ok(Signer {
            sk: Secret::new(buf),
            pk: PublicKey::construct(pk),
        })
    }

    /// Builds a signer from a hex private key, e.g. `0x39bf...`.
    /// Shorter strings are left padded with zeros.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches("0x");
        if digits.is_empty() || digits.len() > 2 * SCALAR_LEN {
            return Err(DacError::decode(
                "secret scalar",
                format!("expected 1 to {} hex digits", 2 * SCALAR_LEN),
            ));
        }
        let mut padded = format!("{:0>width$}", digits, width = 2 * SCALAR_LEN);
        let decoded = hex::decode(&padded);
        padded.zeroize();
        let mut bytes = decoded.map_err(|e| DacError::decode("secret scalar", e))?;
        let res = Self::from_secret_scalar(&bytes);
        bytes.zeroize();
        res
    }

    /// Derives a signer from seed material, for development committees and
    /// fixtures.
    ///
    /// * `prk = HKDF-Extract(DOM_SEP_SIGNER_SALT, seed)`
    /// * `t = HKDF-Expand(prk, DOM_SEP_SIGNER_INFO | ctr, 32)`
    ///
    /// The top bit of `t` is cleared and the first `ctr` for which `t` is a
    /// non zero canonical scalar is used.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        if seed.len() < MIN_SEED_LEN {
            return Err(DacError::decode(
                "seed",
                format!(
                    "the seed length {} is not long enough (required at least {} bytes)",
                    seed.len(),
                    MIN_SEED_LEN
                ),
            ));
        }
        let hk = Hkdf::<Sha256>::extract(Some(DOM_SEP_SIGNER_SALT.as_bytes()), seed);
        let mut ctr = 0u8;
        loop {
            let info = [DOM_SEP_SIGNER_INFO.as_bytes(), &[ctr]].concat();
            let mut okm = [0u8; SCALAR_LEN];
            hk.expand(&info, &mut okm)
                .map_err(|_| DacError::decode("seed", "hkdf expansion failed"))?;
            okm[0] &= 0x7F;

            let res = Self::from_secret_scalar(&okm);
            okm.zeroize();
            match res {
                Ok(signer) => return Ok(signer),
                Err(e) if ctr == u8::max_value() => return Err(e),
                Err(_) => ctr += 1,
            }
        }
    }

    /// The public key `g1^x`.
    pub fn public_key(&self) -> PublicKey {
        self.pk
    }

    /// Signs an arbitrary message: `sigma = H(msg)^x`.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        let mut sigma = hash_to_g2(msg);
        let mut x_sec = self.scalar();
        sigma.mul_assign(x_sec);
        x_sec = Fr::zero();
        debug_assert!(x_sec.is_zero());
        Signature::construct(sigma)
    }

    fn scalar(&self) -> Fr {
        // the bytes were validated at construction
        scalar_from_be(self.sk.expose_secret()).unwrap_or_else(|_| Fr::zero())
    }
}

/// Parses a big endian scalar; rejects zero and values `>= r`.
fn scalar_from_be(bytes: &[u8]) -> Result<Fr> {
    let mut repr = FrRepr::default();
    repr.read_be(bytes)
        .map_err(|e| DacError::decode("secret scalar", e))?;
    let x = Fr::from_repr(repr).map_err(|e| DacError::decode("secret scalar", e))?;
    if x.is_zero() {
        return Err(DacError::decode("secret scalar", "the scalar is zero"));
    }
    Ok(x)
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.pk)
            .field("sk", &"[REDACTED]")
            .finish()
    }
}
