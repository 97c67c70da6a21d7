//! # Grader - HTML selector presence checks
//!
//! Grader loads an HTML document from a file or URL, loads a list of CSS
//! selectors from a JSON file, and reports which selectors match at least
//! one element.
//!
//! ## Modules
//!
//! - [`checks`] - Loading and validating the checks file
//! - [`document`] - Parsed HTML and selector queries
//! - [`evaluate`] - Presence evaluation producing a [`ResultMap`]
//! - [`source`] - Reading HTML from disk or over HTTP
//! - [`output`] - JSON rendering of results
//! - [`ui`] - Diagnostics on stderr
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = grader::check_html_file(Path::new("index.html"), Path::new("checks.json"))
//!     .expect("grading failed");
//! for (selector, present) in result.iter() {
//!     println!("{selector}: {present}");
//! }
//! ```

pub mod checks;
pub mod document;
pub mod error;
pub mod evaluate;
pub mod output;
pub mod source;
pub mod ui;

use std::path::Path;

pub use checks::{load_checks, CheckSpec};
pub use document::{Document, SelectorQuery};
pub use error::{GraderError, Result};
pub use evaluate::{evaluate, ResultMap};

/// Grade in-memory HTML against a set of checks.
pub fn check_html(raw: &[u8], checks: &CheckSpec) -> Result<ResultMap> {
    let document = Document::parse(raw);
    evaluate(&document, checks)
}

/// Grade a local HTML file against a checks file.
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<ResultMap> {
    let raw = source::load_from_file(html_path)?;
    let checks = load_checks(checks_path)?;
    check_html(&raw, &checks)
}

/// Fetch `url` and grade the response body against a checks file.
pub fn check_url(url: &str, checks_path: &Path) -> Result<ResultMap> {
    let raw = source::load_from_url(url)?.wait()?;
    let checks = load_checks(checks_path)?;
    check_html(&raw, &checks)
}
