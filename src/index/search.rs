//! Query paths: approximate bucket probing and the exact linear scan.

use std::collections::HashSet;

use crate::bitvec::BitVector;
use crate::distance::hamming_distance;
use crate::error::{LshError, Result};
use crate::family::HashMember;
use crate::FeatureVector;

use super::LshIndex;

impl<T: FeatureVector> LshIndex<T> {
    /// Approximate query: items within `max_distance` of `query` that
    /// collide with it under at least one hash-family member.
    ///
    /// Every candidate is verified with an exact distance check before
    /// inclusion, so the result never contains a false positive. Misses
    /// are possible and expected: an in-radius item that shares no bucket
    /// with the query is invisible to this path (but not to
    /// [`LshIndex::linear_query`]). Results are deduplicated and returned
    /// in catalog order; the order carries no distance ranking.
    pub fn query(&self, query: &impl FeatureVector, max_distance: u32) -> Result<Vec<&T>> {
        let vector = query.features();
        self.check_dimensions(vector)?;

        let mut hits: HashSet<u32> = HashSet::new();
        for member in self.family.members() {
            let key = member.key(vector);
            if key == HashMember::SENTINEL {
                continue;
            }
            let Some(bucket) = self.table.get(&key) else {
                continue;
            };
            for &id in bucket {
                if hits.contains(&id) {
                    continue;
                }
                if vector.hamming(self.catalog[id as usize].features()) <= max_distance {
                    hits.insert(id);
                }
            }
        }
        Ok(self.collect_hits(hits))
    }

    /// Exact query: scan the full catalog and keep everything within
    /// `max_distance`. Perfect recall and precision at O(n × N) cost; the
    /// correctness oracle and performance baseline for [`LshIndex::query`].
    pub fn linear_query(&self, query: &impl FeatureVector, max_distance: u32) -> Result<Vec<&T>> {
        let vector = query.features();
        self.check_dimensions(vector)?;
        Ok(self
            .catalog
            .iter()
            .filter(|item| vector.hamming(item.features()) <= max_distance)
            .collect())
    }

    /// Exact Hamming distance between two items' feature vectors.
    pub fn distance(&self, a: &impl FeatureVector, b: &impl FeatureVector) -> Result<u32> {
        hamming_distance(a.features(), b.features())
    }

    fn check_dimensions(&self, vector: &BitVector) -> Result<()> {
        let expected = self.dimensionality();
        if vector.len() != expected {
            return Err(LshError::DimensionMismatch {
                expected,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    fn collect_hits(&self, hits: HashSet<u32>) -> Vec<&T> {
        let mut ids: Vec<u32> = hits.into_iter().collect();
        ids.sort_unstable();
        ids.into_iter()
            .map(|id| &self.catalog[id as usize])
            .collect()
    }
}
