use std::fmt;

use crate::{
    arena::Index,
    edge::Edge,
    key::VertexKey,
    ring::{Linked, Links, Ring},
};

/// Handle to a vertex of a [`Graph`](crate::Graph).
///
/// Handles stay valid until the vertex is removed; afterwards the graph
/// treats them as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) Index);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug)]
pub struct Vertex<K: VertexKey> {
    links: Links,
    key: K,
    value: K::Value,
    pub(crate) edges: Ring<Edge>,
    pub(crate) degree: usize,
}

impl<K: VertexKey> Vertex<K> {
    pub(crate) fn new(key: K, value: K::Value) -> Self {
        Self {
            links: Links::default(),
            key,
            value,
            edges: Ring::new(),
            degree: 0,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Number of outgoing edge records.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn into_parts(self) -> (K, K::Value) {
        (self.key, self.value)
    }
}

impl<K: VertexKey> Linked for Vertex<K> {
    fn links(&self) -> &Links {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}
