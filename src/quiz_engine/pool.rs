use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{
    dataset::Dataset,
    models::{Country, DifficultyMode, Tier},
};

/// Chance that a HARD-tier country makes it into a CLASSIC pool.
pub const CLASSIC_HARD_RETENTION: f64 = 0.7;

/// Fisher-Yates shuffle in place; every permutation is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Owned shuffled copy of `items`.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}

/// Build the session pool for `mode`: filter the dataset, then shuffle.
///
/// The result is a permutation of a subset of the dataset, so no country
/// appears twice. CLASSIC keeps each HARD-tier country independently with
/// probability [`CLASSIC_HARD_RETENTION`], so its size varies between calls.
pub fn build_pool<R: Rng>(dataset: &Dataset, mode: DifficultyMode, rng: &mut R) -> Vec<Country> {
    let mut pool: Vec<Country> = match mode {
        DifficultyMode::Easy => dataset
            .countries()
            .iter()
            .filter(|c| matches!(c.difficulty, Tier::Easy | Tier::Medium))
            .cloned()
            .collect(),
        DifficultyMode::Hard => dataset.countries().to_vec(),
        DifficultyMode::Classic => dataset
            .countries()
            .iter()
            .filter(|c| c.difficulty != Tier::Hard || rng.gen_bool(CLASSIC_HARD_RETENTION))
            .cloned()
            .collect(),
    };
    shuffle(&mut pool, rng);
    debug!(target: "pool", %mode, size = pool.len(), of = dataset.len(), "Built session pool");
    pool
}
