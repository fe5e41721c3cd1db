use super::model::{Catalog, Record};

// ---------------------------------------------------------------------------
// Name search, cheapest-per-kg first
// ---------------------------------------------------------------------------

/// Records whose name contains `query` as a case-insensitive substring,
/// sorted ascending by price per kilogram.
///
/// The sort is stable, so ties keep catalog order. An empty query matches
/// every record. Read-only; calling twice on the same catalog yields the
/// same result.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    let mut hits: Vec<&Record> = catalog
        .records()
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect();
    hits.sort_by(|a, b| a.price_per_kg.total_cmp(&b.price_per_kg));
    hits
}
