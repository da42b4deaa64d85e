//! Explicit Cayley graph recorded through the connection hook

use super::{Connection, Connector, Levels};
use crate::algebra::Word;
use crate::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A vertex of the Cayley graph
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// Group element
    pub word: Word,
    /// Level the element was first seen at
    pub level: usize,
}

/// Directed Cayley graph with edges labelled by generators.
///
/// Every connection reported by [`Levels`] becomes an edge, so each vertex
/// of a fully expanded level has one outgoing edge per generator.
#[derive(Clone, Debug, Default)]
pub struct CayleyGraph {
    graph: DiGraph<Vertex, Word>,
    index: HashMap<Word, NodeIndex>,
    discovery_edges: usize,
}

impl CayleyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate levels `0..=number_of_levels` and record the graph between them
    pub fn generate(generators: &[Word], number_of_levels: usize) -> Result<Levels<CayleyGraph>> {
        let mut levels = Levels::with_connector(generators, CayleyGraph::new());
        levels.generate_up_to(number_of_levels)?;
        Ok(levels)
    }

    fn node(&mut self, word: &Word, level: usize) -> NodeIndex {
        if let Some(&idx) = self.index.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(Vertex {
            word: word.clone(),
            level,
        });
        self.index.insert(word.clone(), idx);
        idx
    }

    /// Underlying petgraph graph
    pub fn graph(&self) -> &DiGraph<Vertex, Word> {
        &self.graph
    }

    /// Number of vertices
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges that discovered a new element (a spanning tree of the graph)
    pub fn discovery_edge_count(&self) -> usize {
        self.discovery_edges
    }

    /// Vertex for a word, if present
    pub fn vertex(&self, word: &Word) -> Option<&Vertex> {
        self.index.get(word).map(|&idx| &self.graph[idx])
    }

    /// Outgoing edges of a word as `(generator, target)`, in insertion order
    pub fn successors(&self, word: &Word) -> Vec<(&Word, &Word)> {
        let Some(&idx) = self.index.get(word) else {
            return Vec::new();
        };
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.weight(), &self.graph[e.target()].word))
            .collect();
        // petgraph walks outgoing edges newest first
        out.sort_by_key(|(id, _, _)| *id);
        out.into_iter().map(|(_, label, target)| (label, target)).collect()
    }
}

impl Connector for CayleyGraph {
    fn connect(&mut self, connection: &Connection<'_>) {
        let parent = self.node(connection.parent, connection.parent_level);
        let child = self.node(connection.child, connection.child_level);
        self.graph.add_edge(parent, child, connection.edge.clone());
        if connection.is_new {
            self.discovery_edges += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{IDENTITY, X, Y};

    #[test]
    fn test_graph_of_free_group() {
        let gens = vec![X.clone(), X.inverse(), Y.clone(), Y.inverse()];
        let levels = CayleyGraph::generate(&gens, 3).unwrap();
        let graph = levels.connector();

        assert_eq!(graph.node_count(), levels.seen_count());
        // Every word of levels 0..=2 was expanded once per generator
        assert_eq!(graph.edge_count(), (1 + 4 + 12) * gens.len());
        // The free group graph is a tree: every vertex but the identity was
        // discovered exactly once
        assert_eq!(graph.discovery_edge_count(), graph.node_count() - 1);

        let xy = Word::parse("xy").unwrap();
        assert_eq!(graph.vertex(&xy).map(|v| v.level), Some(2));
    }

    #[test]
    fn test_successors_in_generator_order() {
        let gens = vec![X.clone(), Y.clone()];
        let levels = CayleyGraph::generate(&gens, 1).unwrap();
        let succ: Vec<(String, String)> = levels
            .connector()
            .successors(&IDENTITY)
            .into_iter()
            .map(|(g, t)| (g.to_string(), t.to_string()))
            .collect();
        assert_eq!(
            succ,
            vec![
                ("x".to_string(), "x".to_string()),
                ("y".to_string(), "y".to_string()),
            ]
        );
        assert!(levels.connector().successors(&X).is_empty());
    }

    #[test]
    fn test_cycles_are_recorded() {
        // x and x^2 share elements, so some edges land on seen words
        let gens = vec![X.clone(), Word::parse("x2").unwrap()];
        let levels = CayleyGraph::generate(&gens, 2).unwrap();
        let graph = levels.connector();
        assert_eq!(levels.level_sizes(), vec![1, 2, 2]);
        assert_eq!(graph.edge_count(), 2 + 4);
        assert_eq!(graph.discovery_edge_count(), 4);
    }
}
