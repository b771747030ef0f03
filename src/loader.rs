//! Loader: second pass over an already-validated source.
//!
//! Trusts the validator for structural and referential checks and only
//! parses. The file is re-opened here, so a source that vanished between
//! validate and load surfaces as a file-open error, not a data error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::course::Course;
use crate::errors::{CatalogError, CatalogResult};

/// Parse every non-blank line of `path` into a course and insert it.
///
/// Returns the number of courses inserted. Performs no validation and no
/// deduplication; duplicate course numbers become distinct catalog nodes.
#[instrument(level = "debug", skip(catalog))]
pub fn load_file(path: &Path, catalog: &mut Catalog, delimiter: char) -> CatalogResult<usize> {
    let file = File::open(path).map_err(|source| CatalogError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut loaded = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(delimiter);
        let number = fields.next().unwrap_or_default().to_string();
        let title = fields.next().unwrap_or_default().to_string();
        let prerequisites: Vec<String> = fields
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        catalog.insert(Course::new(number, title, prerequisites));
        loaded += 1;
    }

    debug!(loaded, "courses inserted");
    Ok(loaded)
}
