use std::fmt::Write;

use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Fixed-width result table
// ---------------------------------------------------------------------------

/// Render search results as a fixed-width console table.
///
/// Column widths follow the widest expected values; longer names simply
/// push their row wider rather than being truncated.
pub fn render(results: &[&Record]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<40} {:>10} {:>8} {:<24} {:>12}",
        "Product", "Price", "Weight", "Source file", "Price per kg"
    );
    for record in results {
        let _ = writeln!(
            out,
            "{:<40} {:>10} {:>8} {:<24} {:>12.1}",
            record.name, record.price, record.weight, record.source_file, record.price_per_kg
        );
    }
    out
}
