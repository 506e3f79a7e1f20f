use std::sync::atomic::{AtomicU64, Ordering};

// Backs VertexId allocation. Monotonic, process-wide, never reused.
static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(0);

/// An opaque identity handle for a vertex.
///
/// Ids are minted by [`Vertex::new`] from a process-wide counter, so two
/// separately constructed vertices never compare equal, regardless of their
/// content. This is the identity (not structural) equality the graph is
/// built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub internal: u64,
}

impl VertexId {
    fn fresh() -> Self {
        VertexId {
            internal: NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// A location in the maze: a food flag plus its symmetric adjacency.
///
/// The adjacency list is owned by the vertex but maintained exclusively by
/// [`Graph`](crate::graph::Graph) edge operations, which insert and remove
/// both directions together. Callers cannot reach the mutating primitives,
/// so the symmetric-adjacency invariant cannot be broken from outside.
///
/// Cloning a vertex preserves its id: a clone is the *same* location, which
/// is what makes duplicate-insertion detectable by the graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    has_food: bool,
    edges: Vec<VertexId>,
}

impl Vertex {
    /// Creates a new vertex with a fresh identity and no neighbors.
    pub fn new(has_food: bool) -> Self {
        Vertex {
            id: VertexId::fresh(),
            has_food,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Whether this location naturally carries food. Fixed at construction;
    /// the feasibility search never mutates it, it only *pretends* food is
    /// present while a token is spent here.
    pub fn has_food(&self) -> bool {
        self.has_food
    }

    /// The neighbor ids, in insertion order. Insertion order is what makes
    /// repeated queries on an unmodified graph deterministic.
    pub fn edges(&self) -> &[VertexId] {
        &self.edges
    }

    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.edges.contains(&other)
    }

    // Adjacency primitives. No validation here: the graph checks membership,
    // self-loops and duplicates before calling, and always calls on both
    // endpoints together.
    pub(crate) fn add_edge(&mut self, other: VertexId) {
        self.edges.push(other);
    }

    pub(crate) fn rm_edge(&mut self, other: VertexId) {
        if let Some(pos) = self.edges.iter().position(|&e| e == other) {
            self.edges.remove(pos);
        }
    }
}
