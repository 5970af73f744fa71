//! Hamming LSH demo on a garment-sizing catalog.
//!
//! Each garment advertises the measurements it fits as feature bits, so two
//! garments at small Hamming distance fit almost the same bodies. The demo
//! builds an index over a large random catalog and compares the bucket
//! probe against the exact linear scan.
//!
//! ```bash
//! cargo run --release --example lsh_demo
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nearbit::{BitVector, FeatureVector, LshIndex, LshParams};

/// 35-bit feature space: contiguous ranges of fit measurements.
const DIM: usize = 35;
const MEASUREMENTS: [(&str, usize, usize); 4] = [
    ("bust", 0, 11),
    ("waist", 11, 11),
    ("hip", 22, 11),
    ("length", 33, 2),
];

struct Garment {
    name: String,
    features: BitVector,
}

impl FeatureVector for Garment {
    fn features(&self) -> &BitVector {
        &self.features
    }
}

/// One size per measurement, sometimes stretching to a neighboring size.
fn random_garment(id: usize, rng: &mut StdRng) -> Garment {
    let mut features = BitVector::zeros(DIM);
    for &(_, start, count) in &MEASUREMENTS {
        let fit = start + rng.random_range(0..count);
        features.set(fit, true);
        if fit + 1 < start + count && rng.random_bool(0.5) {
            features.set(fit + 1, true);
        }
        if fit > start && rng.random_bool(0.5) {
            features.set(fit - 1, true);
        }
    }
    Garment {
        name: format!("garment-{id}"),
        features,
    }
}

fn main() -> Result<(), nearbit::LshError> {
    let catalog_size = 200_000;
    let (k, l) = (25, 10);
    let max_distance = 1;

    println!("Hamming LSH over a garment catalog");
    println!("==================================\n");

    let mut rng = StdRng::seed_from_u64(2024);

    let start = Instant::now();
    let catalog: Vec<Garment> = (0..catalog_size)
        .map(|id| random_garment(id, &mut rng))
        .collect();
    println!("generated {catalog_size} garments in {:?}", start.elapsed());

    let query = random_garment(catalog_size, &mut rng);

    let start = Instant::now();
    let index = LshIndex::build(LshParams::new(k, l, DIM), catalog)?;
    println!("built index (k = {k}, l = {l}) in {:?}", start.elapsed());

    let stats = index.stats();
    println!(
        "buckets: {}, avg size: {:.1}, max size: {}\n",
        stats.num_buckets, stats.avg_bucket_size, stats.max_bucket_size
    );

    println!("query: {}", query.features());

    let start = Instant::now();
    let hits = index.query(&query, max_distance)?;
    let probe_time = start.elapsed();

    let start = Instant::now();
    let truth = index.linear_query(&query, max_distance)?;
    let scan_time = start.elapsed();

    println!("bucket probe: {:5} hits in {probe_time:?}", hits.len());
    println!("linear scan:  {:5} hits in {scan_time:?}", truth.len());
    if !truth.is_empty() {
        println!(
            "recall at distance {max_distance}: {:.3}",
            hits.len() as f64 / truth.len() as f64
        );
    }

    println!("\nclosest matches:");
    for garment in hits.iter().take(5) {
        println!("  {} - {}", garment.name, garment.features);
    }

    Ok(())
}
