//! Question wording and the secondary "discovery" fact shown with feedback.

use rand::Rng;

use crate::quiz_engine::models::{Category, Country, DiscoveryFact, THEMATIC_CATEGORIES};

/// Three phrasings per thematic category; `{}` is replaced by the cue value.
fn templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Flag => &[],
        Category::Mascot => &[
            "The spirit of the \"{}\" watches over which nation?",
            "Which country claims the \"{}\" as its sacred mascot?",
            "In which territory is the \"{}\" a symbol of national pride?",
        ],
        Category::Sport => &[
            "Crowds roar for \"{}\" in the arenas of:",
            "Which nation celebrates \"{}\" as its primary national sport?",
            "If you are competing in a national \"{}\" tournament, you are in:",
        ],
        Category::Cuisine => &[
            "If you are dining on a steaming plate of \"{}\", you must be in:",
            "The aromatic scent of \"{}\" defines the culinary heart of:",
            "Travelers visit which country specifically to taste authentic \"{}\"?",
        ],
        Category::Dress => &[
            "Threads of heritage: The \"{}\" is a traditional garment of:",
            "Which nation's ancestors designed the iconic \"{}\"?",
            "Ceremonial dress known as the \"{}\" belongs to:",
        ],
        Category::Landmark => &[
            "The majestic structure of \"{}\" can be found in:",
            "Travelers journey to which nation to marvel at \"{}\"?",
            "Which country's skyline is defined by the historic \"{}\"?",
        ],
        Category::Symbol => &[
            "The delicate \"{}\" is recognized as the national symbol of:",
            "Which nation identifies with the \"{}\" as a core cultural icon?",
            "If you see the \"{}\" used in official state emblems, you are dealing with:",
        ],
        Category::History => &[
            "The defining historical era of the \"{}\" took place in:",
            "Which nation's history was fundamentally shaped by the \"{}\"?",
            "If you are studying the legacy of the \"{}\", your focus is on:",
        ],
    }
}

/// Random phrasing for `category` about `country`. Empty for FLAG.
pub fn prompt<R: Rng>(category: Category, country: &Country, rng: &mut R) -> String {
    let options = templates(category);
    match category.attribute(country) {
        Some(value) if !options.is_empty() => {
            let tpl = options[rng.gen_range(0..options.len())];
            tpl.replacen("{}", value, 1)
        }
        _ => String::new(),
    }
}

/// A random fact about `country` from any thematic category except `asked`.
pub fn discovery<R: Rng>(asked: Category, country: &Country, rng: &mut R) -> Option<DiscoveryFact> {
    let pool: Vec<Category> = THEMATIC_CATEGORIES.iter().copied().filter(|c| *c != asked).collect();
    if pool.is_empty() {
        return None;
    }
    let category = pool[rng.gen_range(0..pool.len())];
    let value = category.attribute(country)?;
    Some(DiscoveryFact {
        category,
        label: category.label().to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::dataset::Dataset;
    use crate::quiz_engine::models::CATEGORY_CYCLE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flag_prompt_is_empty() {
        let ds = Dataset::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(prompt(Category::Flag, &ds.countries()[0], &mut rng).is_empty());
    }

    #[test]
    fn thematic_prompts_quote_the_cue() {
        let ds = Dataset::builtin();
        let mut rng = StdRng::seed_from_u64(2);
        for country in ds.countries() {
            for category in THEMATIC_CATEGORIES {
                let text = prompt(category, country, &mut rng);
                let cue = category.attribute(country).unwrap();
                assert!(text.contains(&format!("\"{cue}\"")), "{text:?} lacks cue {cue:?}");
                assert!(!text.contains("{}"));
            }
        }
    }

    #[test]
    fn discovery_never_repeats_the_asked_category() {
        let ds = Dataset::builtin();
        let country = ds.get("bt").unwrap();
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for asked in CATEGORY_CYCLE {
                let fact = discovery(asked, country, &mut rng).expect("seven facts to choose from");
                assert_ne!(fact.category, asked);
                assert_eq!(fact.label, fact.category.label());
                assert_eq!(Some(fact.value.as_str()), fact.category.attribute(country));
            }
        }
    }
}
