//! Hamming distance between bit vectors.
//!
//! One shared definition serves both the candidate filter inside
//! [`crate::LshIndex::query`] and the public pairwise-distance operation.
//! Standard metric-space properties hold: symmetric, zero exactly for
//! identical vectors, triangle inequality.

use crate::bitvec::BitVector;
use crate::error::{LshError, Result};

/// Hamming distance between two equal-length bit vectors: the number of
/// positions at which they differ.
///
/// Errors with [`LshError::DimensionMismatch`] when the lengths differ.
#[inline]
pub fn hamming_distance(a: &BitVector, b: &BitVector) -> Result<u32> {
    if a.len() != b.len() {
        return Err(LshError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.hamming(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    #[test]
    fn identical_vectors_are_at_distance_zero() {
        let a = bv("101100");
        assert_eq!(hamming_distance(&a, &a).unwrap(), 0);
    }

    #[test]
    fn counts_differing_positions() {
        assert_eq!(hamming_distance(&bv("1000"), &bv("1001")).unwrap(), 1);
        assert_eq!(hamming_distance(&bv("1111"), &bv("0000")).unwrap(), 4);
    }

    #[test]
    fn symmetric() {
        let a = bv("110010");
        let b = bv("011011");
        assert_eq!(
            hamming_distance(&a, &b).unwrap(),
            hamming_distance(&b, &a).unwrap()
        );
    }

    #[test]
    fn triangle_inequality_spot_check() {
        let a = bv("11000000");
        let b = bv("00110000");
        let c = bv("00001100");
        let d_ac = hamming_distance(&a, &c).unwrap();
        let d_ab = hamming_distance(&a, &b).unwrap();
        let d_bc = hamming_distance(&b, &c).unwrap();
        assert!(d_ac <= d_ab + d_bc);
    }

    #[test]
    fn mismatched_lengths_error() {
        let err = hamming_distance(&bv("101"), &bv("1010")).unwrap_err();
        assert_eq!(
            err,
            LshError::DimensionMismatch {
                expected: 3,
                actual: 4
            }
        );
    }
}
