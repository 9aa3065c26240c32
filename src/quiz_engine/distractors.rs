//! Tiered wrong-answer selection.
//!
//! Candidates are ranked by how plausible they are as a wrong answer:
//!
//! | Tier | Rule |
//! |------|------|
//! | thematic | same value of the question's attribute (none for FLAG) |
//! | regional | same region |
//! | near-region | region listed as a neighbour of the answer's region |
//! | global | everything else |
//!
//! Each tier is shuffled on its own, then the tiers are concatenated and
//! deduplicated by id keeping the first occurrence, so a country that
//! qualifies for several tiers is ranked by the best one.

use std::collections::HashSet;

use rand::Rng;

use crate::quiz_engine::{
    dataset::Dataset,
    models::{Category, Country},
    pool::shuffle,
    regions::is_neighbor,
};

/// All distractor candidates for `correct`, best first, without duplicates.
///
/// Drawn from the full dataset, not the session pool. Never contains
/// `correct` itself.
pub fn ranked_candidates<'a, R: Rng>(
    dataset: &'a Dataset,
    correct: &Country,
    category: Category,
    rng: &mut R,
) -> Vec<&'a Country> {
    let others: Vec<&Country> = dataset.countries().iter().filter(|c| c.id != correct.id).collect();

    let mut thematic: Vec<&Country> = match category.attribute(correct) {
        Some(value) => others
            .iter()
            .copied()
            .filter(|c| category.attribute(c) == Some(value))
            .collect(),
        None => Vec::new(),
    };
    let mut regional: Vec<&Country> =
        others.iter().copied().filter(|c| c.region == correct.region).collect();
    let mut near: Vec<&Country> = others
        .iter()
        .copied()
        .filter(|c| is_neighbor(correct.region, c.region))
        .collect();

    shuffle(&mut thematic, rng);
    shuffle(&mut regional, rng);
    shuffle(&mut near, rng);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ranked: Vec<&Country> = thematic
        .into_iter()
        .chain(regional)
        .chain(near)
        .filter(|c| seen.insert(c.id.as_str()))
        .collect();

    let mut global: Vec<&Country> = others
        .into_iter()
        .filter(|c| !seen.contains(c.id.as_str()))
        .collect();
    shuffle(&mut global, rng);
    ranked.extend(global);
    ranked
}

/// Display names of the first `option_count - 1` candidates.
///
/// Returns fewer when there are not enough candidates; that is not an error.
pub fn pick_distractors(candidates: &[&Country], option_count: usize) -> Vec<String> {
    candidates
        .iter()
        .take(option_count.saturating_sub(1))
        .map(|c| c.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Region;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rank(id: &str, category: Category, seed: u64) -> Vec<String> {
        let ds = Dataset::builtin();
        let correct = ds.get(id).unwrap().clone();
        let mut rng = StdRng::seed_from_u64(seed);
        ranked_candidates(&ds, &correct, category, &mut rng)
            .into_iter()
            .map(|c| c.id.clone())
            .collect()
    }

    #[test]
    fn candidates_cover_every_other_country_exactly_once() {
        let ds = Dataset::builtin();
        for seed in [1u64, 2, 3] {
            let got = rank("fj", Category::Sport, seed);
            assert_eq!(got.len(), ds.len() - 1);
            assert!(!got.contains(&"fj".to_string()));
            let unique: HashSet<&String> = got.iter().collect();
            assert_eq!(unique.len(), got.len());
        }
    }

    #[test]
    fn thematic_matches_come_first() {
        // Rugby Union: Samoa, Tonga (Oceania), Madagascar (Africa), Georgia (Eastern Europe).
        let got = rank("fj", Category::Sport, 7);
        let mut head: Vec<&str> = got[..4].iter().map(String::as_str).collect();
        head.sort();
        assert_eq!(head, vec!["ge", "mg", "to", "ws"]);
    }

    #[test]
    fn regional_then_near_region_follow_thematic() {
        let ds = Dataset::builtin();
        // Flag has no thematic tier, so Oceania comes first, then Asia.
        let got = rank("fj", Category::Flag, 9);
        let region_of = |id: &str| ds.get(id).unwrap().region;
        let oceania = ds.countries().iter().filter(|c| c.region == Region::Oceania).count() - 1;
        let asia = ds.countries().iter().filter(|c| c.region == Region::Asia).count();
        assert!(got[..oceania].iter().all(|id| region_of(id) == Region::Oceania));
        assert!(got[oceania..oceania + asia].iter().all(|id| region_of(id) == Region::Asia));
        assert!(got[oceania + asia..]
            .iter()
            .all(|id| !matches!(region_of(id), Region::Oceania | Region::Asia)));
    }

    #[test]
    fn a_country_in_two_tiers_is_ranked_by_the_first() {
        // Ethiopia and Senegal share both the Lion mascot and the region with
        // Kenya; they stay in the thematic block next to Sri Lanka.
        let got = rank("ke", Category::Mascot, 4);
        let mut head: Vec<&str> = got[..3].iter().map(String::as_str).collect();
        head.sort();
        assert_eq!(head, vec!["et", "lk", "sn"]);
        assert_eq!(got.iter().filter(|id| id.as_str() == "et").count(), 1);
    }

    #[test]
    fn pick_takes_option_count_minus_one() {
        let ds = Dataset::builtin();
        let refs: Vec<&Country> = ds.countries().iter().take(5).collect();
        assert_eq!(pick_distractors(&refs, 4).len(), 3);
        assert_eq!(pick_distractors(&refs, 6).len(), 5);
        assert_eq!(pick_distractors(&refs[..2], 6).len(), 2);
        assert!(pick_distractors(&refs, 0).is_empty());
    }
}
