//! The multi-table LSH index.
//!
//! Construction hashes every catalog item through every hash-family member
//! and files it into the bucket for each non-sentinel composite key. All
//! members share one flat bucket table: the product-of-primes keys already
//! occupy disjoint regions of the keyspace, so no per-member tables are
//! needed, and query-time lookup is a single map probe per member.
//!
//! The index is immutable once built. Construction consumes the catalog,
//! nothing exposes `&mut` access afterwards, and the internals are private,
//! so the build-once/query-many contract is enforced by ownership rather
//! than convention.

mod search;
mod stats;

pub use stats::{BucketProfile, IndexStats};

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{LshError, Result};
use crate::family::{HashFamily, HashMember};
use crate::FeatureVector;

/// Bucket entries are catalog ids; most buckets hold a handful of items.
type Bucket = SmallVec<[u32; 4]>;

/// Construction parameters.
///
/// `k` is the number of bits each hash-family member watches (larger `k`:
/// stricter per-table matching, fewer collisions); `l` is the number of
/// members (larger `l`: more tables probed, higher recall).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LshParams {
    /// Bits sampled per hash-family member.
    pub k: usize,
    /// Number of hash-family members (tables).
    pub l: usize,
    /// Feature-space size every vector must match.
    pub dimensionality: usize,
    seed: Option<u64>,
}

impl LshParams {
    /// Parameters for an index over `dimensionality`-bit vectors with `l`
    /// members of subset size `k`. Validated at [`LshIndex::build`].
    pub fn new(k: usize, l: usize, dimensionality: usize) -> Self {
        Self {
            k,
            l,
            dimensionality,
            seed: None,
        }
    }

    /// Configure a deterministic seed for family sampling.
    ///
    /// When set, repeated builds over the same catalog produce identical
    /// bucket tables. Unseeded builds draw a seed from entropy.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Multi-table Hamming LSH index over a catalog of items.
///
/// Built once from a catalog, then queried many times; see the crate docs
/// for the algorithm and the recall trade-off.
#[derive(Debug)]
pub struct LshIndex<T> {
    family: HashFamily,
    table: HashMap<u64, Bucket>,
    catalog: Vec<T>,
}

impl<T: FeatureVector> LshIndex<T> {
    /// Build an index by sampling a fresh hash family.
    ///
    /// Fails with [`LshError::InvalidParameter`] or
    /// [`LshError::PrimeTableExhausted`] on bad parameters, and with
    /// [`LshError::DimensionMismatch`] on the first catalog item whose
    /// vector length differs from `dimensionality`. A failed build leaves
    /// nothing behind; there is no partially built index to repair.
    pub fn build(params: LshParams, catalog: Vec<T>) -> Result<Self> {
        let seed = params.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let family = HashFamily::sample(params.k, params.l, params.dimensionality, &mut rng)?;
        Self::with_family(family, catalog)
    }

    /// Build an index from an explicit hash family.
    pub fn with_family(family: HashFamily, catalog: Vec<T>) -> Result<Self> {
        let dimensionality = family.dimensionality();
        let mut table: HashMap<u64, Bucket> = HashMap::new();
        for (id, item) in catalog.iter().enumerate() {
            let vector = item.features();
            if vector.len() != dimensionality {
                return Err(LshError::DimensionMismatch {
                    expected: dimensionality,
                    actual: vector.len(),
                });
            }
            for member in family.members() {
                let key = member.key(vector);
                if key != HashMember::SENTINEL {
                    table.entry(key).or_default().push(id as u32);
                }
            }
        }
        Ok(Self {
            family,
            table,
            catalog,
        })
    }

    /// Number of catalog items.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Feature-space size every vector must match.
    pub fn dimensionality(&self) -> usize {
        self.family.dimensionality()
    }

    /// The hash family the index was built with.
    pub fn family(&self) -> &HashFamily {
        &self.family
    }

    /// The catalog, in insertion order.
    pub fn catalog(&self) -> &[T] {
        &self.catalog
    }
}
