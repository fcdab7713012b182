use crate::errors::CookableResult;
use crate::recipe::Recipe;

/// Catalog provider. Implemented outside the core (flat-file loader,
/// database, remote service); the core never parses catalog files itself.
pub trait ICatalogSource: Send + Sync {
    /// Load the full catalog snapshot.
    ///
    /// Must yield at least one recipe; a source with nothing to offer
    /// returns `DataError::EmptyCatalog` instead of an empty vec.
    fn load_catalog(&self) -> CookableResult<Vec<Recipe>>;
}
