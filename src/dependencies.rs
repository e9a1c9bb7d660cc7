use std::collections::{BTreeSet, HashMap};

use petgraph::{Direction, graph::DiGraph, graph::NodeIndex};

use crate::types::Signature;

/// A directed graph from declaring classes to the classes their signatures reference.
///
/// Nodes are fully-qualified class names. An edge `A -> B` means a signature declared in `A`
/// mentions `B`.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, class_name: &str) -> NodeIndex {
        if let Some(index) = self.indices.get(class_name) {
            *index
        } else {
            let index = self.graph.add_node(class_name.to_owned());
            self.indices.insert(class_name.to_owned(), index);
            index
        }
    }

    /// Records the classes referenced by `signature` as dependencies of `class_name`.
    /// References of a class to itself are not recorded.
    pub fn add_signature<S>(&mut self, class_name: &str, signature: &S)
    where
        S: Signature + ?Sized,
    {
        let from = self.node(class_name);
        for referenced in signature.referenced_class_names() {
            if referenced == class_name {
                continue;
            }
            let to = self.node(&referenced);
            self.graph.update_edge(from, to, ());
        }
    }

    /// The classes `class_name` depends on.
    #[must_use]
    pub fn dependencies_of(&self, class_name: &str) -> BTreeSet<&str> {
        self.neighbors(class_name, Direction::Outgoing)
    }

    /// The classes that depend on `class_name`.
    #[must_use]
    pub fn dependents_of(&self, class_name: &str) -> BTreeSet<&str> {
        self.neighbors(class_name, Direction::Incoming)
    }

    fn neighbors(&self, class_name: &str, direction: Direction) -> BTreeSet<&str> {
        self.indices
            .get(class_name)
            .into_iter()
            .flat_map(|it| self.graph.neighbors_directed(*it, direction))
            .map(|it| self.graph[it].as_str())
            .collect()
    }

    /// The underlying petgraph graph, for running graph algorithms.
    #[must_use]
    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}
