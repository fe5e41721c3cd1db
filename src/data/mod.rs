/// Data layer: core types, loading, header resolution, and search.
///
/// Architecture:
/// ```text
///  price_*.csv files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  scan directory, resolve headers, build records
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Record>, scan order preserved
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  substring match → refs sorted by price per kg
///   └──────────┘
/// ```
pub mod headers;
pub mod loader;
pub mod model;
pub mod search;
