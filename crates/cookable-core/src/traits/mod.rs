pub mod catalog;
pub mod ingredient_search;
pub mod matcher;

pub use catalog::ICatalogSource;
pub use ingredient_search::{ExternalRecipeHit, IIngredientSearch};
pub use matcher::IRecipeMatcher;
