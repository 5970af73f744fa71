//! nearbit: approximate nearest neighbors for bit vectors via
//! Hamming-distance LSH.
//!
//! Traditional hash functions try to *minimize* collisions. Locality
//! sensitive hashing does the opposite for similar items—it is designed so
//! that:
//!
//! - P[h(a) = h(b)] is high when a and b are close in Hamming distance
//! - P[h(a) = h(b)] is low when they are far apart
//!
//! This enables sublinear search: instead of scanning the whole catalog, a
//! query only compares against the items sharing a bucket with it.
//!
//! ## Algorithm
//!
//! An index is built from `l` hash-family members, each watching `k` bit
//! positions drawn uniformly at random from the `N`-bit feature space.
//! A member maps a vector to a composite key—a product of one table prime
//! per set bit of its subset—and every catalog item is filed into the
//! bucket for each of its `l` keys. All members share one flat keyspace.
//!
//! At query time the same `l` keys are computed for the query vector, the
//! matching buckets are probed, and every candidate is verified with an
//! exact Hamming-distance check. The result therefore never contains a
//! false positive; misses are possible and expected—that is the recall the
//! index trades for speed. [`LshIndex::linear_query`] is the exact oracle.
//!
//! ## Choosing k and l
//!
//! | Knob | Effect |
//! |------|--------|
//! | larger `k` | stricter per-table matching, smaller buckets, lower recall |
//! | larger `l` | more tables probed, higher recall, more memory and build time |
//!
//! Two vectors collide under one member exactly when they agree on all of
//! its `k` positions, so for vectors at distance `d` the collision chance
//! per member is roughly `(1 - d/N)^k`, amplified over `l` members.
//!
//! ## Usage
//!
//! ```
//! use nearbit::{BitVector, LshIndex, LshParams};
//!
//! # fn main() -> Result<(), nearbit::LshError> {
//! let catalog: Vec<BitVector> = vec![
//!     "10110100".parse()?,
//!     "10110101".parse()?,
//!     "01001011".parse()?,
//! ];
//!
//! let params = LshParams::new(3, 6, 8).with_seed(42);
//! let index = LshIndex::build(params, catalog)?;
//!
//! let query: BitVector = "10110100".parse()?;
//! let approximate = index.query(&query, 1)?;
//! let exact = index.linear_query(&query, 1)?;
//!
//! // The bucket probe never returns anything the exact scan misses.
//! assert!(approximate.len() <= exact.len());
//! assert_eq!(exact.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! The index is immutable once built, so concurrent querying is safe
//! without locks: [`LshIndex`] is `Send + Sync` whenever the item type is.
//!
//! ## References
//!
//! - Indyk & Motwani (1998). "Approximate nearest neighbors: towards
//!   removing the curse of dimensionality"
//! - Gionis, Indyk & Motwani (1999). "Similarity search in high dimensions
//!   via hashing" (the Hamming-space construction used here)

pub mod bitvec;
pub mod distance;
pub mod error;
pub mod family;
pub mod index;
mod primes;

pub use bitvec::BitVector;
pub use distance::hamming_distance;
pub use error::{LshError, Result};
pub use family::{HashFamily, HashMember};
pub use index::{BucketProfile, IndexStats, LshIndex, LshParams};

/// Capability an indexed item must expose: a fixed-length feature vector.
///
/// The index never copies feature data; it borrows the vector at build and
/// query time. The vector length must equal the index dimensionality and
/// stay fixed for the lifetime of the index.
pub trait FeatureVector {
    /// The item's feature bits.
    fn features(&self) -> &BitVector;
}

/// A bare bit vector is its own feature vector.
impl FeatureVector for BitVector {
    fn features(&self) -> &BitVector {
        self
    }
}
