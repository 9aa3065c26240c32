use rand::Rng;
use tracing::{debug, instrument};

use crate::quiz_engine::{
    dataset::Dataset,
    distractors::{pick_distractors, ranked_candidates},
    models::{Category, Country, DifficultyMode, Question},
    phrasing,
    pool::shuffle,
};

/// Build the question for round `round_index`.
///
/// Category and answer are deterministic: `CATEGORY_CYCLE[k % 8]` and
/// `pool[k % pool.len()]`. Distractors come from the whole dataset, and the
/// option list is shorter than `mode.option_count()` only when the dataset
/// itself is too small. Returns `None` only for an empty pool.
#[instrument(level = "debug", skip(pool, dataset, rng), fields(pool_len = pool.len()))]
pub fn generate_question<R: Rng>(
    round_index: usize,
    mode: DifficultyMode,
    pool: &[Country],
    dataset: &Dataset,
    rng: &mut R,
) -> Option<Question> {
    if pool.is_empty() {
        return None;
    }
    let category = Category::for_round(round_index);
    let correct = pool[round_index % pool.len()].clone();

    let candidates = ranked_candidates(dataset, &correct, category, rng);
    let mut options = vec![correct.name.clone()];
    options.extend(pick_distractors(&candidates, mode.option_count()));
    shuffle(&mut options, rng);

    let prompt = phrasing::prompt(category, &correct, rng);
    let discovery = phrasing::discovery(category, &correct, rng);

    debug!(
        target: "generator",
        round = round_index, %category, answer = %correct.id, options = options.len(),
        "Generated question"
    );

    Some(Question {
        category,
        correct_answer: correct,
        options,
        prompt,
        discovery,
    })
}
