//! Two-pass validation gate for course source files.
//!
//! Pass one walks every non-blank line checking structural completeness and
//! collecting the file-wide course numbers and prerequisite references.
//! Pass two checks that every referenced prerequisite exists among the
//! collected course numbers. Validation is fail-fast and never touches the
//! catalog; it either clears a file for loading or names the first problem.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::{CatalogError, CatalogResult};

/// Validate the course file at `path`, splitting fields on `delimiter`.
#[instrument(level = "debug")]
pub fn validate_file(path: &Path, delimiter: char) -> CatalogResult<()> {
    let file = File::open(path).map_err(|source| CatalogError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    validate_reader(BufReader::new(file), delimiter)
}

/// Validate any line-oriented source.
///
/// Blank or whitespace-only lines are skipped. Every other line must carry
/// a course number and a title; remaining fields are prerequisite
/// references checked against the whole file after the scan completes.
#[instrument(level = "debug", skip(reader))]
pub fn validate_reader<R: BufRead>(reader: R, delimiter: char) -> CatalogResult<()> {
    let mut known_numbers: Vec<String> = Vec::new();
    // File-wide reference set, deduplicated but order-preserving so the
    // first unresolved prerequisite in the file is the one reported.
    let mut prerequisites: Vec<String> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(delimiter);

        let number = fields.next().unwrap_or_default();
        if number.is_empty() {
            return Err(CatalogError::MissingCourseNumber { line: idx + 1 });
        }
        known_numbers.push(number.to_string());

        let title = fields.next().unwrap_or_default();
        if title.is_empty() {
            return Err(CatalogError::MissingTitle { line: idx + 1 });
        }

        for field in fields {
            if !field.is_empty() && !prerequisites.iter().any(|p| p == field) {
                prerequisites.push(field.to_string());
            }
        }
    }

    debug!(
        courses = known_numbers.len(),
        prerequisites = prerequisites.len(),
        "structural pass complete"
    );

    for prerequisite in &prerequisites {
        if !known_numbers.iter().any(|n| n == prerequisite) {
            return Err(CatalogError::InvalidPrerequisite {
                number: prerequisite.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn accepts_forward_references() {
        let source = "CS101,Intro,CS200\nCS200,Adv,\n";
        assert!(validate_reader(Cursor::new(source), ',').is_ok());
    }

    #[test]
    fn rejects_unknown_prerequisite() {
        let source = "CS101,Intro,CS999\n";
        let err = validate_reader(Cursor::new(source), ',').unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidPrerequisite { ref number } if number == "CS999"
        ));
    }
}
