/// Cookable system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pantry staples assumed always available in unlimited amounts.
/// Excluded from required sets before feasibility filtering; never counted
/// as matched nor as missing.
pub const STAPLE_INGREDIENTS: [&str; 4] = ["salt", "pepper", "oil", "butter"];

/// Upper bound of the recipe rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Whether an ingredient name (already normalized) is a pantry staple.
pub fn is_staple(name: &str) -> bool {
    STAPLE_INGREDIENTS.contains(&name)
}
