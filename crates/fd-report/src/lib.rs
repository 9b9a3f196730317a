//! fd-report: downstream consumers of the extracted graph model.
//!
//! Renders the narrative business document, serializes the model for the
//! external text-generation collaborator, and exports DOT text for diagram
//! renderers. Nothing here writes files or talks to the network; callers
//! decide where artifacts go.

pub mod dot;
pub mod interchange;
pub mod narrative;

pub use dot::to_dot;
pub use interchange::{strip_emphasis, to_json};
pub use narrative::render_report;
