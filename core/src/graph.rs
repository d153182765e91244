use std::collections::BTreeMap;

use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::grammar::{Grammar, NULL};

/// The states and arcs of a [`Grammar`] as a simple directed graph.
///
/// At most one edge per ordered pair of states.
#[derive(Debug, Clone)]
pub struct GrammarGraph<'a> {
    /// All nodes referenced in `graph` are here.
    labels: BTreeMap<&'a str, &'a str>,
    graph: DiGraphMap<&'a str, ()>,
}

impl Grammar {
    /// Build the graph to render.
    ///
    /// Unless `include_null` is set, states labelled `!NULL` are left out.
    /// Arcs with an endpoint that isn't in the graph are dropped.
    pub fn graph(&self, include_null: bool) -> GrammarGraph<'_> {
        let labels = self
            .nodes()
            .iter()
            .filter(|(_, label)| include_null || label.as_str() != NULL)
            .map(|(id, label)| (id.as_str(), label.as_str()))
            .collect::<BTreeMap<_, _>>();

        let mut graph = DiGraphMap::with_capacity(labels.len(), self.arcs().len());
        for id in labels.keys() {
            graph.add_node(*id);
        }
        for arc in self.arcs() {
            let (Some((start, _)), Some((end, _))) = (
                labels.get_key_value(arc.start.as_str()),
                labels.get_key_value(arc.end.as_str()),
            ) else {
                continue;
            };
            graph.add_edge(*start, *end, ());
        }

        debug!(
            include_null,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        GrammarGraph { labels, graph }
    }
}

impl<'a> GrammarGraph<'a> {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    pub fn contains_node(&self, id: &str) -> bool {
        self.labels.contains_key(id)
    }
    pub fn contains_edge(&self, start: &str, end: &str) -> bool {
        match (self.labels.get_key_value(start), self.labels.get_key_value(end)) {
            (Some((start, _)), Some((end, _))) => self.graph.contains_edge(*start, *end),
            _ => false,
        }
    }
    /// The word attached to state `id`.
    pub fn label(&self, id: &str) -> Option<&'a str> {
        self.labels.get(id).copied()
    }
    /// `(id, label)`, ordered by id.
    pub fn nodes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.labels.iter().map(|(id, label)| (*id, *label))
    }
    /// Directed `start -> end`, in the order the arcs were first seen.
    pub fn edges(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.graph.all_edges().map(|(start, end, _)| (start, end))
    }
}
