//! coursecat: in-memory course catalog manager.
//!
//! Courses come from a delimited text file, pass a two-pass referential
//! integrity gate, and land in an arena-backed binary search tree keyed by
//! course number. The catalog supports ordered listing and case-insensitive
//! lookup; the CLI and an interactive menu shell sit on top.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod course;
pub mod errors;
pub mod exitcode;
pub mod loader;
pub mod shell;
pub mod util;
pub mod validator;

pub use catalog::Catalog;
pub use course::Course;
pub use errors::{CatalogError, CatalogResult};
