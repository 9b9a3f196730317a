//! Line-oriented extraction of a [`GraphModel`] from graph-definition text.
//!
//! The recognizer handles four statement shapes (`graph`, `component`,
//! `parameter`, `connect`), applied per physical line with first match
//! winning. Extraction is total: a line that starts with a recognized
//! keyword but does not match its shape is skipped and recorded, and a line
//! with no recognized keyword is inert.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ExtractError, ExtractResult};
use crate::graph::GraphModel;

static GRAPH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^graph\s+"(.+?)""#).unwrap());
static COMPONENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^component\s+"(.+?)"\s+of\s+"(.+?)""#).unwrap());
static PARAMETER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^parameter\s+"(.+?)"\s+=\s+"?(.*?)"?;?$"#).unwrap());
static CONNECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^connect\s+"(.+?)"\s+to\s+"(.+?)""#).unwrap());

/// What a single trimmed line means for the model under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineEffect {
    /// `graph "<name>"`
    GraphName(String),
    /// `component "<name>" of "<type>"`
    Declare { name: String, ctype: String },
    /// `parameter "<name>" = "<value>";` (value quotes and semicolon optional)
    Assign { name: String, value: String },
    /// `connect "<src>" to "<dst>"`
    Connect { source: String, target: String },
    /// Keyword-shaped line that did not match its statement shape.
    Malformed,
    /// No recognized keyword; nothing to do.
    Inert,
}

/// Classify one trimmed line. Pure: no parse state involved.
///
/// Keyword recognition is prefix-based, so e.g. `graphical ...` enters the
/// `graph` branch, fails the shape, and classifies as malformed.
fn classify(line: &str) -> LineEffect {
    if line.starts_with("graph") {
        match GRAPH_RE.captures(line) {
            Some(caps) => LineEffect::GraphName(caps[1].to_string()),
            None => LineEffect::Malformed,
        }
    } else if line.starts_with("component") {
        match COMPONENT_RE.captures(line) {
            Some(caps) => LineEffect::Declare {
                name: caps[1].to_string(),
                ctype: caps[2].to_string(),
            },
            None => LineEffect::Malformed,
        }
    } else if line.starts_with("parameter") {
        match PARAMETER_RE.captures(line) {
            Some(caps) => LineEffect::Assign {
                name: caps[1].to_string(),
                value: caps[2].to_string(),
            },
            None => LineEffect::Malformed,
        }
    } else if line.starts_with("connect") {
        match CONNECT_RE.captures(line) {
            Some(caps) => LineEffect::Connect {
                source: caps[1].to_string(),
                target: caps[2].to_string(),
            },
            None => LineEffect::Malformed,
        }
    } else {
        LineEffect::Inert
    }
}

/// A line the extractor recognized but could not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based physical line number in the source.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

/// Extraction output: the model plus skip diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub model: GraphModel,
    /// Lines that started with a recognized keyword but produced no effect,
    /// in source order. Includes parameter lines seen before any component.
    pub skipped: Vec<SkippedLine>,
}

/// Incremental extractor.
///
/// Holds the accumulator state a line fold needs: the model so far and the
/// current receiving component. A `component` statement opens a receiving
/// window that lasts until the next `component` statement or end of input.
#[derive(Debug, Default)]
pub struct Extractor {
    model: GraphModel,
    current: Option<String>,
    skipped: Vec<SkippedLine>,
    line_no: usize,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one physical line. Never fails.
    pub fn push_line(&mut self, raw: &str) {
        self.line_no += 1;
        let line = raw.trim();
        match classify(line) {
            LineEffect::GraphName(name) => self.model.set_name(name),
            LineEffect::Declare { name, ctype } => {
                self.model.upsert_component(name.clone(), ctype);
                self.current = Some(name);
            }
            LineEffect::Assign { name, value } => {
                let current = self.current.clone();
                match current.and_then(|c| self.model.component_mut(&c)) {
                    Some(comp) => comp.set_parameter(name, value),
                    None => self.skip(line),
                }
            }
            LineEffect::Connect { source, target } => self.model.push_edge(source, target),
            LineEffect::Malformed => self.skip(line),
            LineEffect::Inert => {}
        }
    }

    fn skip(&mut self, line: &str) {
        tracing::debug!(line = self.line_no, text = line, "skipped statement");
        self.skipped.push(SkippedLine {
            line: self.line_no,
            text: line.to_string(),
        });
    }

    /// Consume the extractor, yielding the model and diagnostics.
    pub fn finish(self) -> Extraction {
        Extraction {
            model: self.model,
            skipped: self.skipped,
        }
    }
}

/// Extract a graph model from in-memory source text.
pub fn extract_str(text: &str) -> Extraction {
    let mut extractor = Extractor::new();
    for line in text.lines() {
        extractor.push_line(line);
    }
    let extraction = extractor.finish();
    tracing::debug!(
        components = extraction.model.components().len(),
        edges = extraction.model.edges().len(),
        skipped = extraction.skipped.len(),
        "extraction complete"
    );
    extraction
}

/// Read and extract a graph-definition file.
///
/// Undecodable bytes are replaced rather than aborting the read; an
/// unreadable file is the one hard failure.
pub fn extract_path(path: &Path) -> ExtractResult<Extraction> {
    let bytes = fs::read(path).map_err(|source| ExtractError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_str(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_statement_shapes() {
        let extraction = extract_str(
            r#"
            graph "Sample"
            component "Read_Customers" of "input_table"
            parameter "filename" = "customers.dat";
            component "Filter_Active" of "filter"
            connect "Read_Customers" to "Filter_Active"
            "#,
        );
        let model = &extraction.model;

        assert_eq!(model.name(), "Sample");
        let names: Vec<&str> = model.components().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Read_Customers", "Filter_Active"]);
        assert_eq!(
            model.component("Read_Customers").unwrap().parameter("filename"),
            Some("customers.dat")
        );
        assert_eq!(model.edges().len(), 1);
        assert_eq!(model.edges()[0].source, "Read_Customers");
        assert_eq!(model.edges()[0].target, "Filter_Active");
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn last_graph_name_wins() {
        let model = extract_str("graph \"First\"\ngraph \"Second\"").model;
        assert_eq!(model.name(), "Second");
    }

    #[test]
    fn parameter_value_quoting_and_semicolon_optional() {
        let extraction = extract_str(
            r#"
            component "C" of "reformat"
            parameter "a" = "quoted";
            parameter "b" = "quoted_no_semi"
            parameter "c" = bare;
            parameter "d" = bare_no_semi
            parameter "e" = "oops
            "#,
        );
        let comp = extraction.model.component("C").unwrap();
        assert_eq!(comp.parameter("a"), Some("quoted"));
        assert_eq!(comp.parameter("b"), Some("quoted_no_semi"));
        assert_eq!(comp.parameter("c"), Some("bare"));
        assert_eq!(comp.parameter("d"), Some("bare_no_semi"));
        // Unbalanced quoting is accepted under the optional-quoting rule.
        assert_eq!(comp.parameter("e"), Some("oops"));
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn parameter_before_any_component_is_skipped() {
        let extraction = extract_str("parameter \"key\" = \"v\";\ncomponent \"C\" of \"sort\"");
        assert!(extraction.model.component("C").unwrap().parameters.is_empty());
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].line, 1);
    }

    #[test]
    fn malformed_keyword_lines_are_recorded() {
        let extraction = extract_str(
            "graph Sample\n\
             component \"Broken\n\
             connect \"A\" into \"B\"\n\
             graphical layout here\n\
             some inert line\n",
        );
        assert!(extraction.model.is_empty());
        let lines: Vec<usize> = extraction.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, [1, 2, 3, 4]);
    }

    #[test]
    fn redeclaration_resets_parameters_and_window() {
        let extraction = extract_str(
            r#"
            component "A" of "filter"
            parameter "transform" = "old";
            component "A" of "reformat"
            parameter "record_format" = "new";
            "#,
        );
        let model = &extraction.model;
        assert_eq!(model.components().len(), 1);
        let a = model.component("A").unwrap();
        assert_eq!(a.ctype, "reformat");
        assert_eq!(a.parameter("transform"), None);
        assert_eq!(a.parameter("record_format"), Some("new"));
    }

    #[test]
    fn receiving_window_survives_other_statements() {
        let extraction = extract_str(
            r#"
            component "A" of "filter"
            connect "A" to "B"
            graph "Late"
            parameter "transform" = "cond";
            "#,
        );
        let a = extraction.model.component("A").unwrap();
        assert_eq!(a.parameter("transform"), Some("cond"));
    }

    #[test]
    fn empty_input_is_an_empty_model() {
        let extraction = extract_str("");
        assert!(extraction.model.is_empty());
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn path_read_replaces_undecodable_bytes() {
        let path = std::env::temp_dir().join(format!("fd-graph-lossy-{}.mp", std::process::id()));
        let mut bytes = b"graph \"Noisy\"\ncomponent \"C\" of \"sort\"\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\nconnect \"C\" to \"D\"\n");
        fs::write(&path, bytes).unwrap();

        let extraction = extract_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(extraction.model.name(), "Noisy");
        assert_eq!(extraction.model.edges().len(), 1);
    }

    #[test]
    fn unreadable_source_is_a_hard_error() {
        let missing = std::env::temp_dir().join("fd-graph-does-not-exist.mp");
        let err = extract_path(&missing).unwrap_err();
        assert!(matches!(err, ExtractError::SourceRead { .. }));
    }
}
