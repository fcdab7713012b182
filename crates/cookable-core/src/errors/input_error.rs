/// Query input validation errors.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("user ingredient set is empty")]
    EmptyIngredients,

    #[error("top_n must be at least 1")]
    ZeroTopN,
}
