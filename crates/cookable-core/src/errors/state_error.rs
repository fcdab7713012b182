/// Lifecycle errors: cluster-dependent reads requested before fit.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("clusterer has not been fitted yet")]
    NotFitted,
}
