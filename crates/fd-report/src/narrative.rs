//! Narrative business document rendering.
//!
//! Produces a Markdown document with a component overview, an end-to-end
//! data-flow narrative in dependency order, and an alphabetical parameter
//! appendix. Converting to a richer document format is left to callers.

use std::fmt::Write;
use std::path::Path;

use fd_graph::{Component, Extraction, flow};

/// Render the business document for an extraction.
pub fn render_report(extraction: &Extraction) -> String {
    let model = &extraction.model;
    let mut doc = String::new();

    let title = if model.name().is_empty() {
        "(unnamed graph)"
    } else {
        model.name()
    };
    let _ = writeln!(doc, "# Business Documentation: {title}");
    let _ = writeln!(doc);
    let _ = writeln!(
        doc,
        "This document explains, in non-technical language, what the graph does, \
         how data moves through it, and what each step contributes to the overall \
         outcome."
    );

    let _ = writeln!(doc, "\n## 1. Component Overview");
    for comp in model.components() {
        let _ = writeln!(doc, "\n### {} ({})", comp.name, comp.ctype);
        let _ = writeln!(doc, "\n{}", component_summary(comp));
        if !comp.parameters.is_empty() {
            let _ = writeln!(doc, "\nKey parameters:\n");
            for param in &comp.parameters {
                let _ = writeln!(
                    doc,
                    "- {}: {}",
                    fd_catalog::friendly_param_name(&param.name),
                    param.value
                );
            }
        }
    }

    let _ = writeln!(doc, "\n## 2. End-to-End Data-Flow Narrative");
    let traversal = flow::order(model);
    if traversal.fell_back() {
        let _ = writeln!(
            doc,
            "\nThe connections do not form a one-way flow, so the steps below are \
             listed in the order they are declared."
        );
    }
    let _ = writeln!(doc);
    for (i, name) in traversal.sequence().iter().enumerate() {
        let Some(comp) = model.component(name) else {
            continue;
        };
        let _ = writeln!(
            doc,
            "{}. Data enters **{}**: {}",
            i + 1,
            name,
            component_summary(comp)
        );
        let targets = model.successors(name);
        if !targets.is_empty() {
            let _ = writeln!(doc, "   It passes data to: {}.", targets.join(", "));
        }
    }

    let _ = writeln!(doc, "\n## 3. Parameter Appendix");
    let mut with_params: Vec<&Component> = model
        .components()
        .iter()
        .filter(|c| !c.parameters.is_empty())
        .collect();
    with_params.sort_by(|a, b| a.name.cmp(&b.name));
    for comp in with_params {
        let _ = writeln!(doc, "\n### {}", comp.name);
        let mut params: Vec<_> = comp.parameters.iter().collect();
        params.sort_by(|a, b| a.name.cmp(&b.name));
        for param in params {
            let _ = writeln!(
                doc,
                "- {}: {}",
                fd_catalog::friendly_param_name(&param.name),
                param.value
            );
        }
    }

    if !extraction.skipped.is_empty() {
        let _ = writeln!(
            doc,
            "\nNote: {} source line(s) could not be interpreted and were skipped.",
            extraction.skipped.len()
        );
    }

    doc
}

/// One-sentence role phrase plus heuristic detail drawn from well-known
/// parameters.
pub fn component_summary(comp: &Component) -> String {
    let ctype = comp.ctype.to_ascii_lowercase();
    let mut sentences = vec![fd_catalog::describe_type(&comp.ctype).to_string()];

    if matches!(ctype.as_str(), "input_table" | "input_file") {
        if let Some(filename) = comp.parameter("filename") {
            sentences.push(format!("It reads {}.", base_name(filename)));
        }
    }
    if matches!(ctype.as_str(), "output_table" | "output_file") {
        if let Some(filename) = comp.parameter("filename") {
            sentences.push(format!("It produces {}.", base_name(filename)));
        }
    }
    if ctype == "filter" && comp.parameter("transform").is_some() {
        sentences.push("The filtering condition is defined in the transform expression.".into());
    }
    if ctype == "join" {
        if let Some(keys) = comp.parameter("keys") {
            sentences.push(format!("Join keys: {keys}."));
        }
    }

    sentences.join(" ")
}

fn base_name(value: &str) -> &str {
    Path::new(value)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(value)
}
