use crate::data::model::{Catalog, Record};
use crate::data::search;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The session state, independent of the console surface.
///
/// Owns the catalog built at startup; after loading, everything here is
/// read-only. Search and export borrow it.
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Run a name search against the loaded catalog.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        search::search(&self.catalog, query)
    }
}
