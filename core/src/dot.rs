//! Conversion of a [`GrammarGraph`] into graphviz's DOT model.

use graphviz_rust::dot_structures::{
    Attribute, Edge, EdgeTy, Graph, Id, Node, NodeId, Stmt, Vertex,
};

use crate::graph::GrammarGraph;

// states are digits and labels are `[a-zA-Z!]+`, so neither needs escaping
fn quoted(s: &str) -> Id {
    Id::Escaped(format!("\"{s}\""))
}

fn node_id(id: &str) -> NodeId {
    NodeId(quoted(id), None)
}

impl GrammarGraph<'_> {
    /// A `strict digraph` of the states and arcs, nodes first, then edges.
    pub fn dot(&self) -> Graph {
        let nodes = self.nodes().map(|(id, label)| {
            Stmt::Node(Node {
                id: node_id(id),
                attributes: vec![Attribute(Id::Plain(String::from("label")), quoted(label))],
            })
        });
        let edges = self.edges().map(|(from, to)| {
            Stmt::Edge(Edge {
                ty: EdgeTy::Pair(Vertex::N(node_id(from)), Vertex::N(node_id(to))),
                attributes: vec![],
            })
        });
        Graph::DiGraph {
            id: Id::Plain(String::from("grammar")),
            strict: true,
            stmts: nodes.chain(edges).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grammar;
    use graphviz_rust::printer::{DotPrinter as _, PrinterContext};
    use pretty_assertions::assert_eq;

    const SLF: &str = "\
VERSION=1.0
N=4 L=5
I=0 W=!NULL
I=1 W=yes
I=2 W=no
I=3 W=!NULL
J=0 S=0 E=1
J=1 S=0 E=2
J=2 S=1 E=3
J=3 S=2 E=3
J=4 S=1 E=2
";

    fn node(id: &str, label: &str) -> Stmt {
        Stmt::Node(Node {
            id: node_id(id),
            attributes: vec![Attribute(Id::Plain(String::from("label")), quoted(label))],
        })
    }

    fn edge(from: &str, to: &str) -> Stmt {
        Stmt::Edge(Edge {
            ty: EdgeTy::Pair(Vertex::N(node_id(from)), Vertex::N(node_id(to))),
            attributes: vec![],
        })
    }

    fn digraph(stmts: Vec<Stmt>) -> Graph {
        Graph::DiGraph {
            id: Id::Plain(String::from("grammar")),
            strict: true,
            stmts,
        }
    }

    #[test]
    fn without_null() {
        let grammar = Grammar::parse(SLF).unwrap();
        assert_eq!(
            grammar.graph(false).dot(),
            digraph(vec![node("1", "yes"), node("2", "no"), edge("1", "2")])
        );
    }

    #[test]
    fn with_null() {
        let grammar = Grammar::parse(SLF).unwrap();
        assert_eq!(
            grammar.graph(true).dot(),
            digraph(vec![
                node("0", "!NULL"),
                node("1", "yes"),
                node("2", "no"),
                node("3", "!NULL"),
                edge("0", "1"),
                edge("0", "2"),
                edge("1", "3"),
                edge("2", "3"),
                edge("1", "2"),
            ])
        );
    }

    #[test]
    fn empty() {
        let grammar = Grammar::parse("VERSION=1.0 N=0 L=0").unwrap();
        assert_eq!(grammar.graph(true).dot(), digraph(vec![]));
    }

    #[test]
    fn printed() {
        let grammar = Grammar::parse(SLF).unwrap();
        let text = grammar.graph(true).dot().print(&mut PrinterContext::default());
        assert!(text.trim_start().starts_with("strict"), "{text}");
        assert!(text.contains("digraph"), "{text}");
        assert_eq!(text.matches(r#""!NULL""#).count(), 2, "{text}");
        assert_eq!(text.matches("->").count(), 5, "{text}");
    }
}
