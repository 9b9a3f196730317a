//! fd-graph: graph model layer for flowdoc.
//!
//! Provides:
//! - Core model data structures (GraphModel, Component, Edge)
//! - Line-oriented extraction from `.mp` graph definitions
//! - Dependency ordering for narrative reporting
//!
//! # Example
//!
//! ```
//! use fd_graph::{extract_str, flow};
//!
//! let source = r#"
//! graph "Sample"
//! component "Read" of "input_table"
//! component "Write" of "output_table"
//! connect "Read" to "Write"
//! "#;
//!
//! let extraction = extract_str(source);
//! assert_eq!(extraction.model.name(), "Sample");
//! assert_eq!(extraction.model.components().len(), 2);
//!
//! let traversal = flow::order(&extraction.model);
//! let ordered: Vec<&str> = traversal.sequence().iter().map(String::as_str).collect();
//! assert_eq!(ordered, ["Read", "Write"]);
//! ```

pub mod error;
pub mod extract;
pub mod flow;
pub mod graph;

// Re-exports for ergonomics
pub use error::{ExtractError, ExtractResult};
pub use extract::{Extraction, Extractor, SkippedLine, extract_path, extract_str};
pub use flow::{Traversal, order};
pub use graph::{Component, Edge, GraphModel, Param};
