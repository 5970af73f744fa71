//! Read-only diagnostics over a built index.
//!
//! Everything here inspects the bucket table after the fact; queries never
//! depend on it. Useful when tuning `k` and `l`.

use std::mem;

use serde::Serialize;

use super::{Bucket, LshIndex};
use crate::FeatureVector;

/// Aggregate shape of the bucket table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    /// Catalog size.
    pub num_items: usize,
    /// Feature-space size.
    pub dimensionality: usize,
    /// Number of hash-family members.
    pub num_tables: usize,
    /// Number of distinct composite keys.
    pub num_buckets: usize,
    /// Total bucket entries; one item may appear under several members.
    pub bucket_entries: usize,
    /// `bucket_entries / num_buckets`, or 0 for an empty table.
    pub avg_bucket_size: f64,
    /// Size of the largest bucket.
    pub max_bucket_size: usize,
    /// Approximate in-memory footprint of the bucket table.
    pub size_bytes: usize,
}

/// Pairwise-distance profile of one bucket: how many item pairs sit within
/// a distance threshold and how many beyond it. A bucket with many
/// beyond-threshold pairs is doing little filtering work, a hint that `k`
/// is too small for the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketProfile {
    /// Composite key of the bucket.
    pub key: u64,
    /// Number of items in the bucket.
    pub size: usize,
    /// Item pairs at Hamming distance <= the requested threshold.
    pub pairs_within: usize,
    /// Item pairs beyond the threshold.
    pub pairs_beyond: usize,
}

impl<T: FeatureVector> LshIndex<T> {
    /// Aggregate bucket statistics.
    pub fn stats(&self) -> IndexStats {
        let bucket_entries: usize = self.table.values().map(|b| b.len()).sum();
        let num_buckets = self.table.len();
        let max_bucket_size = self.table.values().map(|b| b.len()).max().unwrap_or(0);
        let avg_bucket_size = if num_buckets == 0 {
            0.0
        } else {
            bucket_entries as f64 / num_buckets as f64
        };
        IndexStats {
            num_items: self.catalog.len(),
            dimensionality: self.dimensionality(),
            num_tables: self.family.len(),
            num_buckets,
            bucket_entries,
            avg_bucket_size,
            max_bucket_size,
            size_bytes: bucket_entries * mem::size_of::<u32>()
                + num_buckets * (mem::size_of::<u64>() + mem::size_of::<Bucket>()),
        }
    }

    /// Pairwise-distance profile of every bucket at the given threshold,
    /// sorted by key.
    ///
    /// Quadratic in bucket size; intended for offline tuning, not for the
    /// query path.
    pub fn bucket_profiles(&self, threshold: u32) -> Vec<BucketProfile> {
        let mut profiles: Vec<BucketProfile> = self
            .table
            .iter()
            .map(|(&key, bucket)| {
                let mut pairs_within = 0;
                let mut pairs_beyond = 0;
                for (i, &a) in bucket.iter().enumerate() {
                    let va = self.catalog[a as usize].features();
                    for &b in &bucket[i + 1..] {
                        let d = va.hamming(self.catalog[b as usize].features());
                        if d <= threshold {
                            pairs_within += 1;
                        } else {
                            pairs_beyond += 1;
                        }
                    }
                }
                BucketProfile {
                    key,
                    size: bucket.len(),
                    pairs_within,
                    pairs_beyond,
                }
            })
            .collect();
        profiles.sort_unstable_by_key(|p| p.key);
        profiles
    }
}

#[cfg(test)]
mod tests {
    use crate::bitvec::BitVector;
    use crate::family::{HashFamily, HashMember};

    use super::super::LshIndex;

    fn bv(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    fn single_member_index() -> LshIndex<BitVector> {
        // One member watching bit 0 over a 2-bit space: "10" and "11"
        // share key 2, "01" is sentinel and never bucketed.
        let member = HashMember::from_positions(vec![0], 2).unwrap();
        let family = HashFamily::from_members(vec![member], 2).unwrap();
        LshIndex::with_family(family, vec![bv("10"), bv("11"), bv("01")]).unwrap()
    }

    #[test]
    fn stats_count_buckets_and_entries() {
        let stats = single_member_index().stats();
        assert_eq!(stats.num_items, 3);
        assert_eq!(stats.num_tables, 1);
        assert_eq!(stats.num_buckets, 1);
        assert_eq!(stats.bucket_entries, 2);
        assert_eq!(stats.max_bucket_size, 2);
        assert!((stats.avg_bucket_size - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn profiles_split_pairs_at_the_threshold() {
        let index = single_member_index();
        // The lone bucket holds "10" and "11", one pair at distance 1.
        let tight = index.bucket_profiles(0);
        assert_eq!(tight.len(), 1);
        assert_eq!(tight[0].key, 2);
        assert_eq!(tight[0].size, 2);
        assert_eq!(tight[0].pairs_within, 0);
        assert_eq!(tight[0].pairs_beyond, 1);

        let loose = index.bucket_profiles(1);
        assert_eq!(loose[0].pairs_within, 1);
        assert_eq!(loose[0].pairs_beyond, 0);
    }
}
