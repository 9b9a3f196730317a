//! Core graph model data structures.

/// A single `name = value` parameter belonging to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// A named processing step in the source graph.
///
/// The type token is kept exactly as declared (case preserved); consumers
/// that look it up in the descriptor catalog compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Component {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ctype: String,
    /// Parameters in declaration order. Reassigning a name overwrites the
    /// value but keeps the original position.
    pub parameters: Vec<Param>,
}

impl Component {
    /// Look up a parameter value by exact name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub(crate) fn set_parameter(&mut self, name: String, value: String) {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(param) => param.value = value,
            None => self.parameters.push(Param { name, value }),
        }
    }
}

/// A declared directed data-flow link between two component names.
///
/// Endpoints are not required to name declared components; dangling
/// references are preserved as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// The extracted graph: a named, ordered collection of components and edges.
///
/// Components keep first-appearance order; a re-declaration overwrites the
/// existing entry in place. Edges keep declaration order and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphModel {
    #[cfg_attr(feature = "serde", serde(rename = "graph_name"))]
    pub(crate) name: String,
    pub(crate) components: Vec<Component>,
    #[cfg_attr(feature = "serde", serde(rename = "connections"))]
    pub(crate) edges: Vec<Edge>,
}

impl GraphModel {
    /// The declared graph name; empty if the source never declared one.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All components in first-appearance order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// All edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a component by exact name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Direct targets of edges whose source is `name`, in edge order.
    ///
    /// Works for any name, declared or not: a dangling source still reports
    /// its targets.
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == name)
            .map(|e| e.target.as_str())
            .collect()
    }

    /// True when nothing was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.components.is_empty() && self.edges.is_empty()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Insert a component, or overwrite an existing one in place.
    ///
    /// An overwrite replaces the type and discards prior parameters while
    /// keeping the component's original position.
    pub(crate) fn upsert_component(&mut self, name: String, ctype: String) {
        let fresh = Component {
            name,
            ctype,
            parameters: Vec::new(),
        };
        match self.components.iter_mut().find(|c| c.name == fresh.name) {
            Some(existing) => *existing = fresh,
            None => self.components.push(fresh),
        }
    }

    pub(crate) fn component_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.name == name)
    }

    pub(crate) fn push_edge(&mut self, source: String, target: String) {
        self.edges.push(Edge { source, target });
    }
}
