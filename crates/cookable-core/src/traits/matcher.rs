use std::collections::BTreeSet;

use crate::errors::CookableResult;
use crate::models::MatchResult;

/// Recipe matcher: ranks the catalog against a user ingredient set.
pub trait IRecipeMatcher: Send + Sync {
    /// Rank feasible recipes for `user_ingredients`, allowing at most
    /// `max_missing` missing ingredients (staples excluded) and returning
    /// at most `top_n` rows, best first.
    ///
    /// An empty result is a valid answer, not an error.
    fn find_matching_recipes(
        &self,
        user_ingredients: &BTreeSet<String>,
        max_missing: usize,
        top_n: usize,
    ) -> CookableResult<Vec<MatchResult>>;
}
