pub mod base;
pub mod difficulty;
pub mod rating;

pub use base::Recipe;
pub use difficulty::Difficulty;
pub use rating::Rating;
