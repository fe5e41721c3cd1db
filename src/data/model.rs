// ---------------------------------------------------------------------------
// Record – one normalized price-list row
// ---------------------------------------------------------------------------

/// A single product position, normalized from one data row of a price list.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Product name, verbatim from the source column.
    pub name: String,
    /// Retail price.
    pub price: f64,
    /// Package weight in kilograms. Always positive.
    pub weight: f64,
    /// `price / weight`, rounded to one decimal. The search sort key.
    pub price_per_kg: f64,
    /// File name (not path) the row came from.
    pub source_file: String,
}

/// Price per kilogram, rounded to one decimal place.
///
/// The caller guarantees `weight > 0`; see the row builder in `loader`.
pub fn price_per_kg(price: f64, weight: f64) -> f64 {
    (price / weight * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All ingested records, in file-scan order then within-file line order.
///
/// Built once by the loader via [`Catalog::push`]; read-only afterwards.
/// No deduplication and no identity beyond position.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Append one record. Only the loader calls this.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Read-only view of all records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_per_kg_rounds_to_one_decimal() {
        assert_eq!(price_per_kg(100.0, 3.0), 33.3);
        assert_eq!(price_per_kg(100.0, 4.0), 25.0);
        assert_eq!(price_per_kg(99.95, 1.0), 100.0);
        assert_eq!(price_per_kg(1.0, 3.0), 0.3);
    }

    #[test]
    fn catalog_preserves_insertion_order() {
        let mut catalog = Catalog::default();
        for (i, name) in ["грибы", "рыба", "мясо"].iter().enumerate() {
            catalog.push(Record {
                name: name.to_string(),
                price: 10.0 * (i + 1) as f64,
                weight: 1.0,
                price_per_kg: 10.0 * (i + 1) as f64,
                source_file: "price_1.csv".to_string(),
            });
        }
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.records()[0].name, "грибы");
        assert_eq!(catalog.records()[2].name, "мясо");
        assert!(!catalog.is_empty());
    }
}
