use std::collections::BTreeSet;
use std::str::FromStr;

use cookable_core::recipe::{Difficulty, Rating, Recipe};

fn omelette() -> Recipe {
    Recipe {
        name: "Omelette".into(),
        ingredients: vec!["Eggs".into(), " Milk ".into(), "Salt".into()],
        rating: Rating::new(4.5),
        cooking_time_minutes: 10,
        difficulty: Difficulty::Easy,
        instructions: "Whisk and fry.".into(),
        cluster_id: None,
    }
}

#[test]
fn rating_clamps_to_scale() {
    assert_eq!(Rating::new(7.0).value(), 5.0);
    assert_eq!(Rating::new(-1.0).value(), 0.0);
    assert_eq!(Rating::new(4.5).value(), 4.5);
}

#[test]
fn rating_normalizes_to_unit_interval() {
    assert_eq!(Rating::new(5.0).normalized(), 1.0);
    assert_eq!(Rating::new(0.0).normalized(), 0.0);
    assert!((Rating::new(4.0).normalized() - 0.8).abs() < 1e-12);
}

#[test]
fn rating_clamps_on_deserialization() {
    let r: Rating = serde_json::from_str("9.9").unwrap();
    assert_eq!(r.value(), 5.0);
}

#[test]
fn difficulty_parses_case_insensitively() {
    assert_eq!(Difficulty::from_str("EASY").unwrap(), Difficulty::Easy);
    assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
    assert_eq!(Difficulty::from_str(" hard ").unwrap(), Difficulty::Hard);
}

#[test]
fn difficulty_rejects_unknown_levels() {
    let err = Difficulty::from_str("impossible").unwrap_err();
    assert!(err.to_string().contains("impossible"));
}

#[test]
fn difficulty_serde_roundtrip_is_lowercase() {
    let json = serde_json::to_string(&Difficulty::Hard).unwrap();
    assert_eq!(json, "\"hard\"");
    let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(back, Difficulty::Hard);
}

#[test]
fn ingredient_set_normalizes_names() {
    let set = omelette().ingredient_set();
    let expected: BTreeSet<String> = ["eggs", "milk", "salt"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(set, expected);
}

#[test]
fn required_ingredients_excludes_staples() {
    let required = omelette().required_ingredients();
    assert!(required.contains("eggs"));
    assert!(required.contains("milk"));
    assert!(!required.contains("salt"));
}

#[test]
fn recipe_deserializes_without_cluster_id() {
    let json = r#"{
        "name": "Toast",
        "ingredients": ["bread", "butter"],
        "rating": 3.5,
        "cooking_time_minutes": 5,
        "difficulty": "easy",
        "instructions": "Toast the bread."
    }"#;
    let recipe: Recipe = serde_json::from_str(json).unwrap();
    assert_eq!(recipe.cluster_id, None);
    assert_eq!(recipe.rating.value(), 3.5);
}
