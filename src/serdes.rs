use crate::{PK_LEN, SIG_LEN};
use pairing::bls12_381::{G1Compressed, G2Compressed, G1, G2};
use pairing::{CurveAffine, CurveProjective, EncodedPoint, GroupDecodingError};
use std::io::{Error, ErrorKind, Read, Result, Write};

/// Serialization support for the committee's curve points.
///
/// Points are always written compressed: a public key is 48 bytes and a
/// signature is 96 bytes. Reading rejects the uncompressed form so that every
/// point has exactly one byte representation, which the mask computation
/// relies on when it compares keys byte by byte.
pub trait DacSerDes: Sized {
    /// Fixed size byte form of the point.
    type Compressed: AsRef<[u8]>;

    /// Convert a point into its compressed form.
    fn compress(&self) -> Self::Compressed;

    /// Serialize a point to a writer.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.compress().as_ref())
    }

    /// Deserialize a point; fails if the blob is not a compressed point in the
    /// prime order subgroup.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self>;
}

impl DacSerDes for G1 {
    type Compressed = [u8; PK_LEN];

    fn compress(&self) -> [u8; PK_LEN] {
        let mut out = [0u8; PK_LEN];
        out.copy_from_slice(G1Compressed::from_affine(self.into_affine()).as_ref());
        out
    }

    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let mut g_buf = G1Compressed::empty();
        reader.read_exact(g_buf.as_mut())?;

        // check the first bit of buf[0] to make sure the point is compressed
        if (g_buf.as_ref()[0] & 0x80) != 0x80 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "expected a compressed G1 point",
            ));
        }
        // into_affine performs both the on-curve and the subgroup check
        match g_buf.into_affine() {
            Ok(p) => Ok(p.into_projective()),
            Err(e) => Err(decoding_error(&e)),
        }
    }
}

impl DacSerDes for G2 {
    type Compressed = [u8; SIG_LEN];

    fn compress(&self) -> [u8; SIG_LEN] {
        let mut out = [0u8; SIG_LEN];
        out.copy_from_slice(G2Compressed::from_affine(self.into_affine()).as_ref());
        out
    }

    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let mut g_buf = G2Compressed::empty();
        reader.read_exact(g_buf.as_mut())?;

        if (g_buf.as_ref()[0] & 0x80) != 0x80 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "expected a compressed G2 point",
            ));
        }
        match g_buf.into_affine() {
            Ok(p) => Ok(p.into_projective()),
            Err(e) => Err(decoding_error(&e)),
        }
    }
}

// The Display impl of GroupDecodingError recurses into itself for most
// variants, so it must never be formatted.
fn decoding_error(e: &GroupDecodingError) -> Error {
    let reason = match e {
        GroupDecodingError::NotOnCurve => "the point is not on the curve".to_owned(),
        GroupDecodingError::NotInSubgroup => {
            "the point is not in the prime order subgroup".to_owned()
        }
        GroupDecodingError::CoordinateDecodingError(coordinate, _) => {
            format!("the {} coordinate is not a field element", coordinate)
        }
        GroupDecodingError::UnexpectedCompressionMode => "unexpected compression mode".to_owned(),
        GroupDecodingError::UnexpectedInformation => {
            "unexpected information in the point at infinity".to_owned()
        }
    };
    Error::new(ErrorKind::InvalidData, reason)
}

/// Reads exactly one point from `bytes`, rejecting trailing data.
pub(crate) fn point_from_slice<P: DacSerDes>(bytes: &[u8], len: usize) -> Result<P> {
    if bytes.len() != len {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("expected {} bytes, got {}", len, bytes.len()),
        ));
    }
    let mut reader = bytes;
    P::deserialize(&mut reader)
}
