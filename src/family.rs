//! The random hash family.
//!
//! A [`HashMember`] watches a fixed random subset of `k` bit positions and
//! folds the watched bits into one composite key: starting from 1, the
//! accumulator is multiplied by the i-th table prime for every set bit, in
//! the order the positions were sampled at construction. Distinct patterns
//! over the subset therefore produce distinct products, and all members of
//! a family share one flat `u64` keyspace.
//!
//! An all-unset subset leaves the accumulator at 1, which is mapped to the
//! reserved sentinel key 0: the vector is simply not bucketed under that
//! member. Giving this case a real key would funnel every vector that is
//! zero on *some* member's subset into a single shared bucket.

use rand::seq::index::sample as sample_indices;
use rand::Rng;

use crate::bitvec::BitVector;
use crate::error::{LshError, Result};
use crate::primes::PRIMES;

/// One member of the hash family: a fixed subset of bit positions mapped
/// to a composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashMember {
    positions: Vec<usize>,
}

impl HashMember {
    /// Key reserved for "no watched bit is set": the vector is excluded
    /// from this member's table but stays reachable through other members
    /// and through the linear path.
    pub const SENTINEL: u64 = 0;

    /// Draw `k` distinct positions uniformly at random from
    /// `[0, dimensionality)`, without replacement.
    pub fn sample<R: Rng + ?Sized>(
        k: usize,
        dimensionality: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_subset(k, dimensionality)?;
        let positions = sample_indices(rng, dimensionality, k).into_vec();
        Ok(Self { positions })
    }

    /// Construct a member from explicit positions.
    ///
    /// Positions must be distinct and below `dimensionality`. Their order
    /// is kept: it decides which table prime each position multiplies by.
    pub fn from_positions(positions: Vec<usize>, dimensionality: usize) -> Result<Self> {
        validate_subset(positions.len(), dimensionality)?;
        for (i, &p) in positions.iter().enumerate() {
            if p >= dimensionality {
                return Err(LshError::InvalidParameter(format!(
                    "position {p} is out of range for dimensionality {dimensionality}"
                )));
            }
            if positions[..i].contains(&p) {
                return Err(LshError::InvalidParameter(format!(
                    "duplicate position {p} in hash member"
                )));
            }
        }
        Ok(Self { positions })
    }

    /// The watched positions, in key order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Subset size `k`.
    pub fn subset_size(&self) -> usize {
        self.positions.len()
    }

    /// Composite key for `vector`, or [`HashMember::SENTINEL`] when none
    /// of the watched bits is set.
    ///
    /// Multiplication wraps: with large subsets the product exceeds `u64`,
    /// and a wrapped collision merely merges buckets that the exact
    /// distance filter separates again. The product carries at most one
    /// factor of two, so wrapping can never land on the sentinel.
    ///
    /// `vector` must cover every watched position; [`crate::LshIndex`]
    /// validates dimensions before calling this.
    pub fn key(&self, vector: &BitVector) -> u64 {
        let mut acc: u64 = 1;
        for (i, &pos) in self.positions.iter().enumerate() {
            if vector.get(pos) {
                acc = acc.wrapping_mul(PRIMES[i]);
            }
        }
        if acc == 1 {
            Self::SENTINEL
        } else {
            acc
        }
    }
}

fn validate_subset(k: usize, dimensionality: usize) -> Result<()> {
    if k == 0 || dimensionality == 0 {
        return Err(LshError::InvalidParameter(format!(
            "subset size and dimensionality must be positive (k = {k}, dimensionality = {dimensionality})"
        )));
    }
    if k > dimensionality {
        return Err(LshError::InvalidParameter(format!(
            "subset size k = {k} exceeds dimensionality {dimensionality}"
        )));
    }
    if k > PRIMES.len() {
        return Err(LshError::PrimeTableExhausted {
            requested: k,
            available: PRIMES.len(),
        });
    }
    Ok(())
}

/// An ordered collection of independently sampled [`HashMember`]s over one
/// feature space. Immutable once built.
#[derive(Debug, Clone)]
pub struct HashFamily {
    members: Vec<HashMember>,
    dimensionality: usize,
}

impl HashFamily {
    /// Sample `l` members of subset size `k` over `[0, dimensionality)`.
    ///
    /// Members are drawn independently; two members may end up watching
    /// the same subset. That is fine—the construction is probabilistic,
    /// not deduplicated.
    pub fn sample<R: Rng + ?Sized>(
        k: usize,
        l: usize,
        dimensionality: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if l == 0 {
            return Err(LshError::InvalidParameter(
                "family size l must be positive".into(),
            ));
        }
        let members = (0..l)
            .map(|_| HashMember::sample(k, dimensionality, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            members,
            dimensionality,
        })
    }

    /// Build a family from explicit members, for reproducible setups and
    /// parameter tuning. Members may have differing subset sizes.
    pub fn from_members(members: Vec<HashMember>, dimensionality: usize) -> Result<Self> {
        if members.is_empty() {
            return Err(LshError::InvalidParameter(
                "family must contain at least one member".into(),
            ));
        }
        for member in &members {
            if let Some(&max) = member.positions.iter().max() {
                if max >= dimensionality {
                    return Err(LshError::InvalidParameter(format!(
                        "member position {max} is out of range for dimensionality {dimensionality}"
                    )));
                }
            }
        }
        Ok(Self {
            members,
            dimensionality,
        })
    }

    /// The members, in construction order.
    pub fn members(&self) -> &[HashMember] {
        &self.members
    }

    /// Number of members (`l`).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the family has no members (never true for a constructed
    /// family).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Feature-space size every hashed vector must match.
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }
}
