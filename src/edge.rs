//! Edge records and the operations on a vertex's edge ring.

use tracing::trace;

use crate::{
    arena::Index,
    error::GraphError,
    graph::Graph,
    key::VertexKey,
    ring::{Linked, Links},
    vertex::VertexId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) Index);

/// One directed arc. The source is the vertex whose ring holds the record.
#[derive(Debug)]
pub struct Edge {
    links: Links,
    target: VertexId,
}

impl Edge {
    fn new(target: VertexId) -> Self {
        Self {
            links: Links::default(),
            target,
        }
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

impl Linked for Edge {
    fn links(&self) -> &Links {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

impl<K: VertexKey> Graph<K> {
    /// Adds an arc from `from` to `to`.
    ///
    /// The arc is always directed: an undirected connection needs a second
    /// call with the endpoints swapped. Nothing prevents parallel arcs.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId, GraphError> {
        if !self.contains(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        let vertex = self
            .vertices
            .get_mut(from.0)
            .ok_or(GraphError::UnknownVertex(from))?;

        let edge = self.edges.insert(Edge::new(to));
        if let Err(err) = vertex.edges.append(&mut self.edges, edge) {
            self.edges.remove(edge);
            return Err(err.into());
        }
        vertex.degree += 1;

        trace!(%from, %to, "added edge");
        Ok(EdgeId(edge))
    }

    /// Removes the first arc from `from` to `to`.
    ///
    /// Returns `Ok(false)` without touching anything when there is no such
    /// arc, so both sides of an undirected connection can be removed blindly.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool, GraphError> {
        if !self.contains(from) {
            return Err(GraphError::UnknownVertex(from));
        }

        match self.search_edge(from, to) {
            Some(edge) => {
                self.release_edge(from, edge)?;
                trace!(%from, %to, "removed edge");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Finds the first arc in `from`'s ring that points at `target`.
    pub fn search_edge(&self, from: VertexId, target: VertexId) -> Option<EdgeId> {
        let vertex = self.vertices.get(from.0)?;
        vertex
            .edges
            .iter(&self.edges)
            .find(|&edge| {
                self.edges
                    .get(edge)
                    .is_some_and(|edge| edge.target == target)
            })
            .map(EdgeId)
    }

    /// `true` when there is an arc from `from` to `to`.
    pub fn has_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.search_edge(from, to).is_some()
    }

    /// `true` when an arc exists between the two vertices in either direction.
    pub fn has_neighbor(&self, a: VertexId, b: VertexId) -> bool {
        self.has_arc(a, b) || self.has_arc(b, a)
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.0)
    }

    /// Arcs leaving `vertex`, in ring order.
    pub fn edges_of(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices
            .get(vertex.0)
            .map(|vertex| vertex.edges.iter(&self.edges))
            .into_iter()
            .flatten()
            .map(EdgeId)
    }

    /// Targets of the arcs leaving `vertex`, in ring order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges_of(vertex)
            .filter_map(|edge| self.edges.get(edge.0).map(Edge::target))
    }

    /// Unlinks `edge` from `owner`'s ring and frees it.
    pub(crate) fn release_edge(&mut self, owner: VertexId, edge: EdgeId) -> Result<(), GraphError> {
        let vertex = self
            .vertices
            .get_mut(owner.0)
            .ok_or(GraphError::UnknownVertex(owner))?;

        vertex.edges.remove(&mut self.edges, edge.0)?;
        vertex.degree -= 1;
        self.edges.remove(edge.0);
        Ok(())
    }
}
