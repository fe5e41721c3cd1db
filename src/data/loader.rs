use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use thiserror::Error;

use super::headers::{self, Columns, Role};
use super::model::{price_per_kg, Catalog, Record};

// ---------------------------------------------------------------------------
// Row-level errors
// ---------------------------------------------------------------------------

/// Why a single data row was rejected. Rejected rows are logged and skipped;
/// they never abort the rest of the file.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("row has no {role} field")]
    MissingField { role: &'static str },
    #[error("{role} value '{value}' is not a number")]
    InvalidNumber { role: &'static str, value: String },
    #[error("weight must be positive, got {weight}")]
    NonPositiveWeight { weight: f64 },
}

// ---------------------------------------------------------------------------
// Row builder
// ---------------------------------------------------------------------------

/// Build a normalized [`Record`] from one CSV row using resolved columns.
pub fn build_record(
    columns: Columns,
    row: &csv::StringRecord,
    source_file: &str,
) -> Result<Record, RowError> {
    let name = field(row, columns.name, "name")?;
    let price = parse_number(row, columns.price, "price")?;
    let weight = parse_number(row, columns.weight, "weight")?;
    if weight <= 0.0 {
        return Err(RowError::NonPositiveWeight { weight });
    }
    Ok(Record {
        name: name.to_string(),
        price,
        weight,
        price_per_kg: price_per_kg(price, weight),
        source_file: source_file.to_string(),
    })
}

fn field<'a>(
    row: &'a csv::StringRecord,
    index: usize,
    role: &'static str,
) -> Result<&'a str, RowError> {
    row.get(index).ok_or(RowError::MissingField { role })
}

fn parse_number(
    row: &csv::StringRecord,
    index: usize,
    role: &'static str,
) -> Result<f64, RowError> {
    let raw = field(row, index, role)?;
    raw.parse::<f64>().map_err(|_| RowError::InvalidNumber {
        role,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Directory scan
// ---------------------------------------------------------------------------

/// How a directory entry is treated by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    /// Name contains "price": parsed as a price list.
    PriceList,
    /// Tabular-looking extension but no "price" marker: reported, skipped.
    NonConforming,
    /// Anything else: skipped silently.
    Ignored,
}

fn classify(file_name: &str) -> FileKind {
    if file_name.to_lowercase().contains("price") {
        return FileKind::PriceList;
    }
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" | "json" | "txt" => FileKind::NonConforming,
        _ => FileKind::Ignored,
    }
}

/// Outcome of ingesting one price-list candidate.
#[derive(Debug, PartialEq)]
enum FileOutcome {
    Loaded { appended: usize, skipped_rows: usize },
    MissingColumns(Vec<Role>),
}

/// Scan `dir` (non-recursive) and load every price-list candidate.
///
/// Entries are visited in file-name order so the catalog order is
/// deterministic. Per-file problems are reported and skipped; only a failure
/// to list the directory itself is an error.
pub fn load_dir(dir: &Path) -> Result<Catalog> {
    let mut names: Vec<String> = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.context("reading directory entry")?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("skipping file with non-UTF-8 name: {raw:?}"),
        }
    }
    names.sort();

    let mut catalog = Catalog::default();
    let mut candidates = 0usize;
    for name in &names {
        match classify(name) {
            FileKind::PriceList => {
                candidates += 1;
                match ingest_price_file(&dir.join(name), name, &mut catalog) {
                    Ok(FileOutcome::Loaded {
                        appended,
                        skipped_rows: 0,
                    }) => info!("processed \"{name}\": {appended} records"),
                    Ok(FileOutcome::Loaded {
                        appended,
                        skipped_rows,
                    }) => info!("processed \"{name}\": {appended} records, {skipped_rows} rows skipped"),
                    Ok(FileOutcome::MissingColumns(missing)) => {
                        let roles: Vec<&str> = missing.iter().map(|r| r.label()).collect();
                        warn!(
                            "file \"{name}\" is missing required columns ({}), skipped",
                            roles.join(", ")
                        );
                    }
                    Err(e) => warn!("skipping \"{name}\": {e:#}"),
                }
            }
            FileKind::NonConforming => {
                warn!("file \"{name}\" does not look like a price list, skipped");
            }
            FileKind::Ignored => {}
        }
    }

    if candidates == 0 {
        warn!("no price-list files found in {}", dir.display());
    } else if catalog.is_empty() {
        warn!("price-list files contained no usable records");
    }
    Ok(catalog)
}

/// Parse one price-list file, appending valid rows to the catalog.
///
/// A file whose header row does not resolve all three roles contributes
/// nothing. Within a resolved file each bad row is logged with its line
/// number and skipped; the remaining rows still load.
fn ingest_price_file(
    path: &Path,
    file_name: &str,
    catalog: &mut Catalog,
) -> Result<FileOutcome> {
    let file =
        fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let header_map = headers::resolve(reader.headers().context("reading header row")?.iter());
    let Some(columns) = header_map.columns() else {
        return Ok(FileOutcome::MissingColumns(header_map.missing_roles()));
    };

    let mut appended = 0usize;
    let mut skipped_rows = 0usize;
    for (row_no, result) in reader.records().enumerate() {
        // Header is line 1; data starts at line 2.
        let line = row_no + 2;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("{file_name}:{line}: unreadable row: {e}");
                skipped_rows += 1;
                continue;
            }
        };
        if row.iter().all(|f| f.is_empty()) {
            continue;
        }
        match build_record(columns, &row, file_name) {
            Ok(record) => {
                catalog.push(record);
                appended += 1;
            }
            Err(e) => {
                warn!("{file_name}:{line}: skipping row: {e}");
                skipped_rows += 1;
            }
        }
    }
    Ok(FileOutcome::Loaded {
        appended,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("price_scout_loader_{name}"));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn row(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    const COLS: Columns = Columns {
        name: 0,
        price: 1,
        weight: 2,
    };

    #[test]
    fn builds_record_with_derived_price_per_kg() {
        let rec = build_record(COLS, &row(&["сыр", "100", "3"]), "price_1.csv").unwrap();
        assert_eq!(rec.name, "сыр");
        assert_eq!(rec.price, 100.0);
        assert_eq!(rec.weight, 3.0);
        assert_eq!(rec.price_per_kg, 33.3);
        assert_eq!(rec.source_file, "price_1.csv");
    }

    #[test]
    fn short_row_is_a_missing_field() {
        let err = build_record(COLS, &row(&["сыр", "100"]), "p.csv").unwrap_err();
        assert_eq!(err, RowError::MissingField { role: "weight" });
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = build_record(COLS, &row(&["сыр", "дорого", "1"]), "p.csv").unwrap_err();
        assert_eq!(
            err,
            RowError::InvalidNumber {
                role: "price",
                value: "дорого".to_string()
            }
        );
    }

    #[test]
    fn zero_weight_is_rejected() {
        let err = build_record(COLS, &row(&["сыр", "100", "0"]), "p.csv").unwrap_err();
        assert_eq!(err, RowError::NonPositiveWeight { weight: 0.0 });
    }

    #[test]
    fn classifies_by_marker_then_extension() {
        assert_eq!(classify("price_list_1.csv"), FileKind::PriceList);
        assert_eq!(classify("PRICES.TXT"), FileKind::PriceList);
        assert_eq!(classify("data.csv"), FileKind::NonConforming);
        assert_eq!(classify("notes.JSON"), FileKind::NonConforming);
        assert_eq!(classify("readme.md"), FileKind::Ignored);
    }

    #[test]
    fn loads_valid_price_files() {
        let dir = tmp_dir("valid");
        write(
            &dir,
            "price_1.csv",
            "товар,цена,вес\nмолоко,80,1\nсыр,600,2\n",
        );
        let catalog = load_dir(&dir).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].name, "молоко");
        assert_eq!(catalog.records()[1].price_per_kg, 300.0);
    }

    #[test]
    fn bad_rows_are_skipped_but_file_still_loads() {
        let dir = tmp_dir("bad_rows");
        write(
            &dir,
            "price_mixed.csv",
            "название,цена,масса\nгречка,90,1\nхлеб,дорого,1\nсоль,20,0\nрис,100,2\n",
        );
        let catalog = load_dir(&dir).unwrap();
        let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["гречка", "рис"]);
    }

    #[test]
    fn missing_columns_skips_whole_file() {
        let dir = tmp_dir("missing_cols");
        write(&dir, "price_no_weight.csv", "товар,цена\nмолоко,80\n");
        let catalog = load_dir(&dir).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn non_conforming_files_contribute_nothing() {
        let dir = tmp_dir("non_conforming");
        write(&dir, "data.csv", "товар,цена,вес\nмолоко,80,1\n");
        write(&dir, "readme.md", "notes\n");
        let catalog = load_dir(&dir).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn scan_order_follows_file_names() {
        let dir = tmp_dir("order");
        write(&dir, "price_b.csv", "товар,цена,вес\nиз_б,10,1\n");
        write(&dir, "price_a.csv", "товар,цена,вес\nиз_а,10,1\n");
        let catalog = load_dir(&dir).unwrap();
        assert_eq!(catalog.records()[0].source_file, "price_a.csv");
        assert_eq!(catalog.records()[1].source_file, "price_b.csv");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let mut dir = std::env::temp_dir();
        dir.push("price_scout_loader_does_not_exist");
        let _ = fs::remove_dir_all(&dir);
        assert!(load_dir(&dir).is_err());
    }
}
