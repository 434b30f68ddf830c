use tracing::debug;

use crate::{
    arena::Arena,
    edge::{Edge, EdgeId},
    error::{GraphError, RingError},
    key::VertexKey,
    ring::Ring,
    vertex::{Vertex, VertexId},
};

/// Whether each connection is a single arc or a pair of mirrored arcs.
///
/// The graph does not remember this; callers pass the same direction to every
/// operation that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn is_directed(self) -> bool {
        self == Direction::Directed
    }
}

/// A named graph owning every vertex and edge it contains.
///
/// Vertices form a ring in insertion order, and each vertex heads its own ring
/// of outgoing edges. Both kinds of records are stored in arenas owned by the
/// graph, so dropping the graph releases everything at once.
#[derive(Debug)]
pub struct Graph<K: VertexKey> {
    name: String,
    pub(crate) vertices: Arena<Vertex<K>>,
    pub(crate) edges: Arena<Edge>,
    ring: Ring<Vertex<K>>,
    size: usize,
}

impl<K: VertexKey> Graph<K> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Arena::new(),
            edges: Arena::new(),
            ring: Ring::new(),
            size: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a vertex whose value is derived from its key.
    ///
    /// Keys are not checked for uniqueness here: call [`Graph::lookup`] first.
    pub fn add_vertex(&mut self, key: K) -> Result<VertexId, GraphError> {
        let value = key.initial_value();
        self.add_vertex_with(key, value)
    }

    pub fn add_vertex_with(&mut self, key: K, value: K::Value) -> Result<VertexId, GraphError> {
        debug!(graph = %self.name, %key, "adding vertex");

        let index = self.vertices.insert(Vertex::new(key, value));
        if let Err(err) = self.ring.append(&mut self.vertices, index) {
            self.vertices.remove(index);
            return Err(err.into());
        }
        self.size += 1;

        Ok(VertexId(index))
    }

    /// Removes `vertex` together with every arc touching it.
    ///
    /// Outgoing arcs are dropped one at a time from the head of the vertex's
    /// ring. For undirected graphs the mirrored arc of each one is dropped as
    /// well, if it exists. Any arc still pointing at the vertex afterwards is
    /// swept from the other vertices, so no edge is left dangling.
    pub fn remove_vertex(
        &mut self,
        vertex: VertexId,
        direction: Direction,
    ) -> Result<Vertex<K>, GraphError> {
        if !self.contains(vertex) {
            return Err(GraphError::UnknownVertex(vertex));
        }

        while let Some(edge) = self.vertices.get(vertex.0).and_then(|v| v.edges.head()) {
            let neighbor = self
                .edges
                .get(edge)
                .map(Edge::target)
                .ok_or(RingError::Stale { node: edge })?;

            self.release_edge(vertex, EdgeId(edge))?;

            if !direction.is_directed() && self.contains(neighbor) {
                self.remove_edge(neighbor, vertex)?;
            }
        }

        let others: Vec<VertexId> = self.vertex_ids().filter(|&other| other != vertex).collect();
        for other in others {
            while self.remove_edge(other, vertex)? {}
        }

        self.ring.remove(&mut self.vertices, vertex.0)?;
        let removed = self
            .vertices
            .remove(vertex.0)
            .ok_or(GraphError::UnknownVertex(vertex))?;
        self.size -= 1;

        debug!(graph = %self.name, key = %removed.key(), "removed vertex");
        Ok(removed)
    }

    /// Finds the first vertex with the given key, scanning in ring order.
    pub fn lookup(&self, key: &K) -> Option<VertexId> {
        self.vertex_ids()
            .find(|&vertex| self.key(vertex) == Some(key))
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(vertex.0)
    }

    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex<K>> {
        self.vertices.get(vertex.0)
    }

    pub fn key(&self, vertex: VertexId) -> Option<&K> {
        self.vertex(vertex).map(Vertex::key)
    }

    pub fn degree(&self, vertex: VertexId) -> Option<usize> {
        self.vertex(vertex).map(Vertex::degree)
    }

    /// Vertices in ring order, which is insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ring.iter(&self.vertices).map(VertexId)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<K>)> + '_ {
        self.vertex_ids()
            .filter_map(|id| self.vertex(id).map(|vertex| (id, vertex)))
    }

    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Arcs in a directed graph, mirrored pairs in an undirected one.
    pub fn edge_count(&self, direction: Direction) -> usize {
        let arcs: usize = self.vertices().map(|(_, vertex)| vertex.degree()).sum();
        match direction {
            Direction::Directed => arcs,
            Direction::Undirected => arcs / 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Tears the graph down: every edge ring first, then the vertex ring.
    pub fn clear(&mut self) -> Result<(), GraphError> {
        debug!(graph = %self.name, vertices = self.size, "clearing graph");

        while let Some(head) = self.ring.head() {
            let vertex = VertexId(head);
            while let Some(edge) = self.vertices.get(head).and_then(|v| v.edges.head()) {
                self.release_edge(vertex, EdgeId(edge))?;
            }
            self.ring.remove(&mut self.vertices, head)?;
            self.vertices.remove(head);
            self.size -= 1;
        }

        Ok(())
    }

    /// Checks the structural invariants: the cached size matches the vertex
    /// ring, every degree matches its edge ring, and every arc targets a live
    /// vertex.
    pub fn is_consistent(&self) -> bool {
        if self.ring.len(&self.vertices) != self.size || self.vertices.len() != self.size {
            return false;
        }

        let arcs: usize = self.vertices().map(|(_, vertex)| vertex.degree()).sum();
        if arcs != self.edges.len() {
            return false;
        }

        self.vertices().all(|(id, vertex)| {
            vertex.edges.len(&self.edges) == vertex.degree()
                && self.neighbors(id).all(|neighbor| self.contains(neighbor))
        })
    }
}
