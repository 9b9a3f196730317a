//! Dependency ordering of a graph model for narrative reporting.

use std::collections::{HashMap, VecDeque};

use crate::graph::GraphModel;

/// A dependency-respecting ordering over a model's declared components.
///
/// The sequence always covers every declared component exactly once. When
/// the declared subgraph cannot be fully ordered (a cycle, or a component
/// fed only by an undeclared source), the whole sequence falls back to
/// declaration order and [`Traversal::fell_back`] reports the degradation;
/// there is never a partial order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    sequence: Vec<String>,
    fell_back: bool,
}

impl Traversal {
    /// Component names in traversal order.
    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    /// True when the declaration-order fallback was taken.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }
}

/// Order the declared components with Kahn's algorithm.
///
/// In-degrees count only edges whose target names a declared component.
/// Seeds enter in declaration order; successors are visited in
/// edge-declaration order and enqueue in discovery order, so the result is
/// deterministic for a given source.
pub fn order(model: &GraphModel) -> Traversal {
    let mut indegree: HashMap<&str, usize> = model
        .components()
        .iter()
        .map(|c| (c.name.as_str(), 0))
        .collect();

    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in model.edges() {
        outgoing
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        if let Some(n) = indegree.get_mut(edge.target.as_str()) {
            *n += 1;
        }
    }

    let mut queue: VecDeque<&str> = model
        .components()
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| indegree[name] == 0)
        .collect();

    let mut sequence = Vec::with_capacity(model.components().len());
    while let Some(node) = queue.pop_front() {
        sequence.push(node.to_string());
        for &succ in outgoing.get(node).into_iter().flatten() {
            if let Some(n) = indegree.get_mut(succ) {
                *n -= 1;
                if *n == 0 {
                    queue.push_back(succ);
                }
            }
        }
    }

    if sequence.len() < model.components().len() {
        return Traversal {
            sequence: model.components().iter().map(|c| c.name.clone()).collect(),
            fell_back: true,
        };
    }

    Traversal {
        sequence,
        fell_back: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_str;

    fn names(traversal: &Traversal) -> Vec<&str> {
        traversal.sequence().iter().map(String::as_str).collect()
    }

    #[test]
    fn linear_chain_orders_by_dependency() {
        // Declared out of flow order on purpose.
        let model = extract_str(
            r#"
            component "Write" of "output_table"
            component "Read" of "input_table"
            component "Sort" of "sort"
            connect "Read" to "Sort"
            connect "Sort" to "Write"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["Read", "Sort", "Write"]);
        assert!(!traversal.fell_back());
    }

    #[test]
    fn seeds_and_successors_keep_declaration_order() {
        let model = extract_str(
            r#"
            component "A" of "input_table"
            component "B" of "input_table"
            component "Join" of "join"
            component "Out" of "output_table"
            connect "A" to "Join"
            connect "B" to "Join"
            connect "Join" to "Out"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["A", "B", "Join", "Out"]);
    }

    #[test]
    fn cycle_falls_back_to_declaration_order() {
        let model = extract_str(
            r#"
            component "A" of "reformat"
            component "B" of "reformat"
            connect "A" to "B"
            connect "B" to "A"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["A", "B"]);
        assert!(traversal.fell_back());
    }

    #[test]
    fn self_loop_falls_back() {
        let model = extract_str(
            r#"
            component "Loop" of "reformat"
            connect "Loop" to "Loop"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["Loop"]);
        assert!(traversal.fell_back());
    }

    #[test]
    fn dangling_target_does_not_count() {
        let model = extract_str(
            r#"
            component "A" of "input_table"
            component "B" of "output_table"
            connect "A" to "B"
            connect "B" to "Ghost"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["A", "B"]);
        assert!(!traversal.fell_back());
    }

    #[test]
    fn dangling_source_forces_fallback() {
        // "B" is fed only by an undeclared component, so it can never reach
        // in-degree zero; the whole order degrades to declaration order.
        let model = extract_str(
            r#"
            component "B" of "filter"
            component "A" of "input_table"
            connect "Ghost" to "B"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["B", "A"]);
        assert!(traversal.fell_back());
    }

    #[test]
    fn duplicate_edges_are_consistent() {
        let model = extract_str(
            r#"
            component "A" of "input_table"
            component "B" of "output_table"
            connect "A" to "B"
            connect "A" to "B"
            "#,
        )
        .model;

        let traversal = order(&model);
        assert_eq!(names(&traversal), ["A", "B"]);
        assert!(!traversal.fell_back());
    }

    #[test]
    fn empty_model_yields_empty_traversal() {
        let traversal = order(&extract_str("").model);
        assert!(traversal.sequence().is_empty());
        assert!(!traversal.fell_back());
    }
}
