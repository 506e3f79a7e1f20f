use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::graph::{Vertex, VertexId};

/// An undirected simple graph of locations.
///
/// # Invariants
/// - Every id in a vertex's adjacency list belongs to a vertex in the graph.
/// - Adjacency is symmetric: `v` appears in `u`'s edges iff `u` appears in
///   `v`'s edges.
/// - No self-loops, no multi-edges.
///
/// All three are maintained by construction: [`fix_edge`](Graph::fix_edge)
/// and [`block_edge`](Graph::block_edge) are the only ways to touch
/// adjacency, vertices are never removed, and every invalid request is
/// rejected with a `false` return rather than a panic.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: HashMap<VertexId, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Neighbor ids of a member vertex, or `None` for a non-member.
    pub fn neighbors(&self, id: VertexId) -> Option<&[VertexId]> {
        self.vertices.get(&id).map(|v| v.edges())
    }

    // Lookup for the search internals, which only ever walk edges of member
    // vertices. Edges always point at members (vertices are never removed),
    // so the panic on a missing key is unreachable from the public surface.
    pub(crate) fn vertex_ref(&self, id: VertexId) -> &Vertex {
        &self.vertices[&id]
    }

    /// Whether an edge between `u` and `v` exists in either direction.
    ///
    /// A single direction counts as "exists": an asymmetric adjacency cannot
    /// arise through this type's operations, but if it did, treating it as
    /// present keeps `fix_edge` from making it worse.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.vertices.get(&u).is_some_and(|vu| vu.is_adjacent(v))
            || self.vertices.get(&v).is_some_and(|vv| vv.is_adjacent(u))
    }

    /// Adds a vertex to the graph, taking ownership of it.
    ///
    /// Returns `false` (and drops the argument) if a vertex with the same
    /// identity is already present, `true` otherwise. With identity carried
    /// in the vertex itself, this is the only duplicate that can exist:
    /// a clone of an already-inserted vertex.
    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        let id = v.id();
        if self.vertices.contains_key(&id) {
            trace!(?id, "rejected duplicate vertex");
            return false;
        }
        self.vertices.insert(id, v);
        debug!(?id, total = self.vertices.len(), "vertex added");
        true
    }

    /// Fixes (adds) the edge between `u` and `v`.
    ///
    /// Fails if the endpoints coincide (self-loops are not representable in
    /// a simple graph), if either endpoint is not a member, or if the edge
    /// already exists. On success both adjacency directions are inserted
    /// together, so the symmetry invariant holds on every return.
    pub fn fix_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if u == v || !self.contains(u) || !self.contains(v) || self.has_edge(u, v) {
            trace!(?u, ?v, "rejected fix_edge");
            return false;
        }
        // Membership was checked above, so both lookups succeed.
        if let Some(vert) = self.vertices.get_mut(&u) {
            vert.add_edge(v);
        }
        if let Some(vert) = self.vertices.get_mut(&v) {
            vert.add_edge(u);
        }
        debug!(?u, ?v, "edge fixed");
        true
    }

    /// Blocks (removes) the edge between `u` and `v`.
    ///
    /// Fails if either endpoint is not a member or if the edge exists in
    /// neither direction. On success both directions are removed together.
    pub fn block_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if !self.contains(u) || !self.contains(v) || !self.has_edge(u, v) {
            trace!(?u, ?v, "rejected block_edge");
            return false;
        }
        if let Some(vert) = self.vertices.get_mut(&u) {
            vert.rm_edge(v);
        }
        if let Some(vert) = self.vertices.get_mut(&v) {
            vert.rm_edge(u);
        }
        debug!(?u, ?v, "edge blocked");
        true
    }
}
