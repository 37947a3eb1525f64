//! Synthetic sales data generator.
//!
//! Produces the raw transaction dataset from a row count, a seed and a start
//! date. All randomness flows through a locally constructed [`SalesRng`];
//! there is no process-global RNG state, so concurrent runs with different
//! seeds never interfere.
//!
//! # Determinism contract
//!
//! One ChaCha8 stream keyed solely by the seed is consumed column by column,
//! in this order: product ids, quantities, unit prices, ratings. Re-running
//! with the same `size` and `seed` reproduces the dataset exactly. Changing
//! the draw order changes every dataset ever recorded; treat it as frozen.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::models::RawSale;

/// Locally scoped deterministic RNG for dataset generation.
///
/// Wraps a seeded ChaCha8 stream. The only randomness source in the crate.
pub struct SalesRng {
    rng: ChaCha8Rng,
}

impl SalesRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform product id in [100, 105).
    fn product_id(&mut self) -> u32 {
        self.rng.gen_range(100..105)
    }

    /// Uniform quantity in [1, 15).
    fn quantity(&mut self) -> u32 {
        self.rng.gen_range(1..15)
    }

    /// Uniform unit price in [100.0, 500.0).
    fn unit_price(&mut self) -> f64 {
        self.rng.gen_range(100.0..500.0)
    }

    /// Uniform pick from {1, 2, 3, 4, 5, missing}; each equally likely.
    fn rating(&mut self) -> Option<f64> {
        let pick: u8 = self.rng.gen_range(0..6);
        match pick {
            5 => None,
            stars => Some(f64::from(stars + 1)),
        }
    }
}

/// Generate `size` consecutive daily sales starting at `start_date`.
///
/// A size of 0 yields an empty dataset. No gaps, no weekend handling:
/// row `i` is dated `start_date + i` days.
pub fn generate(size: usize, seed: u64, start_date: NaiveDate) -> Vec<RawSale> {
    let mut rng = SalesRng::new(seed);

    // Column-major draws: each field consumes a contiguous run of the
    // stream, matching the frozen determinism contract above.
    let product_ids: Vec<u32> = (0..size).map(|_| rng.product_id()).collect();
    let quantities: Vec<u32> = (0..size).map(|_| rng.quantity()).collect();
    let unit_prices: Vec<f64> = (0..size).map(|_| rng.unit_price()).collect();
    let ratings: Vec<Option<f64>> = (0..size).map(|_| rng.rating()).collect();

    let sales: Vec<RawSale> = (0..size)
        .map(|i| RawSale {
            date: start_date + chrono::Duration::days(i as i64),
            product_id: product_ids[i],
            quantity: quantities[i],
            unit_price: unit_prices[i],
            rating: ratings[i],
        })
        .collect();

    debug!(size, seed, %start_date, "generated synthetic sales dataset");
    sales
}
