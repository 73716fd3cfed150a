//! Random-selection primitives shared by the generators.
//!
//! Every helper takes the random source explicitly so that callers can pass
//! `thread_rng()` in production and a seeded `StdRng` in tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::ScoreBand;

/// Uniformly pick one entry, or `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Uniformly pick `count` distinct entries (fewer if the slice is shorter).
pub fn pick_distinct<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    count: usize,
) -> Vec<&'a T> {
    items.choose_multiple(rng, count).collect()
}

/// Weighted random pick of an index.
///
/// Returns `None` if there are no weights or they sum to zero.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[u32]) -> Option<usize> {
    let total: u64 = weights.iter().map(|w| *w as u64).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for (i, &w) in weights.iter().enumerate() {
        let w = w as u64;
        if roll < w {
            return Some(i);
        }
        roll -= w;
    }

    // Unreachable with a non-zero total
    None
}

/// Pick a band by weight, then a uniform score inside it.
pub fn roll_score<R: Rng + ?Sized>(rng: &mut R, bands: &[ScoreBand]) -> u8 {
    let weights: Vec<u32> = bands.iter().map(|b| b.weight).collect();
    match weighted_index(rng, &weights) {
        Some(i) => {
            let band = bands[i];
            rng.gen_range(band.min..=band.max).min(100)
        }
        None => rng.gen_range(0..=100),
    }
}

/// Uniform offset in `-spread..=spread`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: i32) -> i32 {
    if spread <= 0 {
        return 0;
    }
    rng.gen_range(-spread..=spread)
}

/// Clamp a raw score into `0..=100`.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}
