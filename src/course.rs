use std::fmt;

use itertools::Itertools;

/// A single catalog record: course number, title, and the course numbers
/// that must be completed first.
///
/// Courses are built once by the loader and never mutated afterwards.
/// Prerequisites keep their encounter order from the source file and are
/// not deduplicated per course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course number, the catalog key (e.g. "CSCI200")
    pub number: String,
    /// Course title
    pub title: String,
    /// Prerequisite course numbers in file order
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            prerequisites,
        }
    }
}

impl fmt::Display for Course {
    /// Renders `NUMBER, TITLE` and, only when prerequisites exist, a
    /// second `Prerequisites: p1, p2, ...` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.title)?;
        if !self.prerequisites.is_empty() {
            write!(f, "\nPrerequisites: {}", self.prerequisites.iter().join(", "))?;
        }
        Ok(())
    }
}
