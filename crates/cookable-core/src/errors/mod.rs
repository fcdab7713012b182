//! Error taxonomy for the Cookable core.
//!
//! Three subsystem enums — [`DataError`] (unusable catalog at fit time),
//! [`StateError`] (cluster-dependent read before fit), [`InputError`]
//! (invalid query arguments) — wrapped by the workspace-wide
//! [`CookableError`]. Nothing is retried internally; every error surfaces
//! to the caller synchronously.

mod data_error;
mod input_error;
mod state_error;

pub use data_error::DataError;
pub use input_error::InputError;
pub use state_error::StateError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum CookableError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("config parse failed: {0}")]
    Config(#[from] toml::de::Error),
}

/// Workspace-wide result alias.
pub type CookableResult<T> = Result<T, CookableError>;
