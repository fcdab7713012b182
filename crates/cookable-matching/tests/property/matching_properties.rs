use std::collections::BTreeSet;

use proptest::prelude::*;

use cookable_clustering::fit_catalog;
use cookable_core::config::{ClusteringConfig, MatchingConfig};
use cookable_core::constants::is_staple;
use cookable_core::recipe::{Difficulty, Rating};
use cookable_core::traits::IRecipeMatcher;
use cookable_core::Recipe;
use cookable_matching::MatchingEngine;

const POOL: [&str; 12] = [
    "eggs",
    "milk",
    "flour",
    "rice",
    "pasta",
    "tomatoes",
    "garlic",
    "onion",
    "chicken",
    "beef",
    "salt",
    "butter",
];

fn ingredient_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(POOL.to_vec(), 1..6)
}

fn build_catalog(specs: &[(Vec<&'static str>, f64, u32)]) -> Vec<Recipe> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (ingredients, rating, minutes))| Recipe {
            name: format!("recipe-{i}"),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            rating: Rating::new(*rating),
            cooking_time_minutes: *minutes,
            difficulty: Difficulty::Easy,
            instructions: String::new(),
            cluster_id: None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ranked_results_respect_invariants(
        specs in prop::collection::vec((ingredient_subset(), 0.0f64..=5.0, 0u32..180), 1..12),
        user_vec in ingredient_subset(),
        max_missing in 0usize..4,
        top_n in 1usize..10,
    ) {
        let catalog = build_catalog(&specs);
        let user: BTreeSet<String> = user_vec.iter().map(|s| s.to_string()).collect();

        let model = fit_catalog(catalog, ClusteringConfig::default()).unwrap();
        let engine = MatchingEngine::new(&model, MatchingConfig::default());
        let results = engine.find_matching_recipes(&user, max_missing, top_n).unwrap();

        prop_assert!(results.len() <= top_n);

        for r in &results {
            prop_assert!(r.num_missing <= max_missing);
            prop_assert_eq!(r.num_matching, r.matching_ingredients.len());
            prop_assert_eq!(r.num_missing, r.missing_ingredients.len());

            // Staples never surface on either side of the split.
            prop_assert!(!r.matching_ingredients.iter().any(|i| is_staple(i)));
            prop_assert!(!r.missing_ingredients.iter().any(|i| is_staple(i)));

            // The split partitions the staple-adjusted required set.
            let recipe = model.recipes().iter().find(|c| c.name == r.name).unwrap();
            prop_assert_eq!(
                r.num_matching + r.num_missing,
                recipe.required_ingredients().len()
            );

            prop_assert!((0.0..=1.0).contains(&r.base_score));
            prop_assert!((0.0..=0.4).contains(&r.cluster_boost));
            prop_assert!((0.0..=1.0).contains(&r.final_score));
        }

        // Ranking is non-increasing in final score.
        prop_assert!(results.windows(2).all(|w| w[0].final_score >= w[1].final_score));
    }

    #[test]
    fn matching_is_deterministic(
        specs in prop::collection::vec((ingredient_subset(), 0.0f64..=5.0, 0u32..180), 1..10),
        user_vec in ingredient_subset(),
    ) {
        let user: BTreeSet<String> = user_vec.iter().map(|s| s.to_string()).collect();

        let model_a = fit_catalog(build_catalog(&specs), ClusteringConfig::default()).unwrap();
        let model_b = fit_catalog(build_catalog(&specs), ClusteringConfig::default()).unwrap();

        let engine_a = MatchingEngine::new(&model_a, MatchingConfig::default());
        let engine_b = MatchingEngine::new(&model_b, MatchingConfig::default());

        let first = engine_a.find_matching_recipes(&user, 2, 5).unwrap();
        let second = engine_b.find_matching_recipes(&user, 2, 5).unwrap();

        let rows = |rs: &[cookable_core::MatchResult]| {
            rs.iter()
                .map(|r| (r.name.clone(), r.final_score))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(rows(&first), rows(&second));
    }
}
