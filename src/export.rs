use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Static HTML export
// ---------------------------------------------------------------------------

const HEAD: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>Price catalog</title>\n\
</head>\n\
<body>\n\
<table border=\"1\">\n\
<tr style=\"background-color: grey; color: white;\">\n\
<th>#</th><th>Product</th><th>Price</th><th>Weight</th><th>Source file</th><th>Price per kg</th>\n\
</tr>\n";

const FOOT: &str = "</table>\n</body>\n</html>\n";

/// Write the whole catalog as a static HTML table, overwriting `path`.
///
/// One row per record in catalog order, numbered from 1. Returns `false`
/// without touching the filesystem when the catalog is empty, `true` after a
/// successful write. Missing parent directories are created.
pub fn export_html(catalog: &Catalog, path: &Path) -> Result<bool> {
    if catalog.is_empty() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    w.write_all(HEAD.as_bytes()).context("writing HTML header")?;
    for (number, record) in catalog.records().iter().enumerate() {
        writeln!(
            w,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
            number + 1,
            escape(&record.name),
            record.price,
            record.weight,
            escape(&record.source_file),
            record.price_per_kg,
        )
        .context("writing HTML row")?;
    }
    w.write_all(FOOT.as_bytes()).context("writing HTML footer")?;
    w.flush().context("flushing HTML output")?;
    Ok(true)
}

/// Minimal HTML text escaping for cell content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
