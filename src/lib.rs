//! # underdoc
//!
//! Extracts the Underscore.js API reference from its documentation page into
//! structured JSON: one record per documented top-level function, carrying
//! its display name, declared aliases, signature arguments and prose
//! description.
//!
//! The pipeline is a single forward pass: fetch (or inject) HTML, load it
//! into a DOM tree, select and filter the documented-method paragraphs, and
//! serialize the resulting records. The extraction stages are pure functions
//! of the HTML, so the whole core is testable without network access.
//!
//! ## Quick Start
//!
//! ```rust
//! use underdoc::parse_docs;
//!
//! let html = r#"<div id="documentation">
//!   <p id="map">
//!     <b class="header">map</b><code>_.map(list, iteratee)</code>
//!     <br>Produces a new array of values.</p>
//! </div>"#;
//!
//! let entries = parse_docs(html)?;
//! assert_eq!(entries[0].name, "map");
//! assert_eq!(entries[0].arguments, vec!["list", "iteratee"]);
//! # Ok::<(), underdoc::Error>(())
//! ```

mod entry;
mod error;

/// Read-only DOM loading and querying.
pub mod dom;

/// Core candidate selection and field extraction.
pub mod extractor;

/// Documentation page retrieval over HTTP(S).
pub mod fetch;

/// Compiled regexes and CSS selectors used by the extractor.
pub mod patterns;

/// Colored console progress output for interactive runs.
pub mod report;

/// JSON serialization and output sinks.
pub mod sink;

/// Text cleanup for extracted prose.
pub mod text;

// Public API - re-exports
pub use entry::ApiEntry;
pub use error::{Error, Result};

/// Extracts all top-level API entries from a documentation HTML string.
///
/// This is the injected-document entry point: it covers the DOM-loading and
/// extraction stages and never touches the network. Entries come back in
/// document order.
pub fn parse_docs(html: &str) -> Result<Vec<ApiEntry>> {
    let doc = dom::load(html)?;
    Ok(extractor::extract_entries(&doc))
}
