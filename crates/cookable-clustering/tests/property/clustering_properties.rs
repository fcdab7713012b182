use proptest::prelude::*;

use cookable_clustering::{fit_catalog, IngredientVocabulary};
use cookable_core::config::ClusteringConfig;
use cookable_core::recipe::{Difficulty, Rating};
use cookable_core::Recipe;

const POOL: [&str; 10] = [
    "eggs", "milk", "flour", "rice", "pasta", "tomatoes", "garlic", "onion", "chicken", "beef",
];

fn ingredient_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(POOL.to_vec(), 1..5)
}

fn build_catalog(specs: &[(Vec<&'static str>, f64)]) -> Vec<Recipe> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (ingredients, rating))| Recipe {
            name: format!("recipe-{i}"),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            rating: Rating::new(*rating),
            cooking_time_minutes: 30,
            difficulty: Difficulty::Medium,
            instructions: String::new(),
            cluster_id: None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fit_partitions_the_catalog(
        specs in prop::collection::vec((ingredient_subset(), 0.0f64..=5.0), 1..20),
        n_clusters in 1usize..8,
    ) {
        let config = ClusteringConfig {
            n_clusters,
            ..ClusteringConfig::default()
        };
        let catalog = build_catalog(&specs);
        let size = catalog.len();

        let model = fit_catalog(catalog, config).unwrap();

        // Effective k never exceeds the catalog size.
        prop_assert!(model.n_clusters() <= size);

        // Every recipe holds an assignment in [0, k).
        for recipe in model.recipes() {
            let id = recipe.cluster_id.expect("fit assigns every recipe");
            prop_assert!(id < model.n_clusters());
        }

        // Summary counts sum to the catalog size; popularity is normalized.
        let total: usize = model.summaries().values().map(|s| s.num_recipes).sum();
        prop_assert_eq!(total, size);
        for summary in model.summaries().values() {
            prop_assert!(summary.num_recipes >= 1);
            prop_assert!((0.0..=1.0).contains(&summary.popularity_score));
            prop_assert!((summary.popularity_score - summary.avg_rating / 5.0).abs() < 1e-12);
        }

        // Every assigned cluster id appears in the summary table.
        for recipe in model.recipes() {
            prop_assert!(model.summaries().contains_key(&recipe.cluster_id.unwrap()));
        }
    }

    #[test]
    fn fit_is_reproducible(
        specs in prop::collection::vec((ingredient_subset(), 0.0f64..=5.0), 1..15),
    ) {
        let a = fit_catalog(build_catalog(&specs), ClusteringConfig::default()).unwrap();
        let b = fit_catalog(build_catalog(&specs), ClusteringConfig::default()).unwrap();

        let labels = |m: &cookable_clustering::TrainedModel| {
            m.recipes().iter().map(|r| r.cluster_id).collect::<Vec<_>>()
        };
        prop_assert_eq!(labels(&a), labels(&b));
        prop_assert_eq!(a.summaries(), b.summaries());
    }

    #[test]
    fn vocabulary_covers_every_recipe(
        specs in prop::collection::vec((ingredient_subset(), 0.0f64..=5.0), 1..15),
    ) {
        let catalog = build_catalog(&specs);
        let vocab = IngredientVocabulary::build(&catalog);

        // Sorted, duplicate-free dimensions.
        prop_assert!(vocab.terms().windows(2).all(|w| w[0] < w[1]));

        // Every encoding has vocabulary length, and every recipe ingredient
        // lights up exactly its own dimensions.
        for recipe in &catalog {
            let encoded = vocab.encode(recipe);
            prop_assert_eq!(encoded.len(), vocab.len());
            let ones = encoded.iter().filter(|&&x| x == 1.0).count();
            prop_assert_eq!(ones, recipe.ingredient_set().len());
        }
    }
}
