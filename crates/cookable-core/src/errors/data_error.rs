/// Catalog data errors raised at fit time.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("no usable ingredient signal: every recipe has an empty ingredient list")]
    NoIngredientSignal,

    #[error("unknown difficulty level: {value}")]
    UnknownDifficulty { value: String },
}
