use hashbrown::HashSet;

use crate::graph::VertexId;

/// Query-local state of an in-progress depth-first walk.
///
/// Holds the set of vertices currently on the recursion stack and the
/// candidate path in visit order. Owning this state per query (instead of
/// marking shared vertices) is what makes queries reentrant and guarantees
/// no transient marker outlives the call: the whole thing is dropped when
/// the query returns.
pub(crate) struct Walk {
    on_stack: HashSet<VertexId>,
    path: Vec<VertexId>,
}

impl Walk {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Walk {
            on_stack: HashSet::with_capacity(capacity),
            path: Vec::with_capacity(capacity),
        }
    }

    /// Marks `id` as on-stack and appends it to the candidate path.
    pub(crate) fn enter(&mut self, id: VertexId) {
        self.on_stack.insert(id);
        self.path.push(id);
    }

    /// Undoes a matching [`enter`](Walk::enter) when a branch is abandoned.
    pub(crate) fn leave(&mut self, id: VertexId) {
        self.on_stack.remove(&id);
        self.path.pop();
    }

    pub(crate) fn seen(&self, id: VertexId) -> bool {
        self.on_stack.contains(&id)
    }

    /// Consumes the walk, yielding the accepted path. Only meaningful after
    /// the target was entered and no frame has left since.
    pub(crate) fn into_path(self) -> Vec<VertexId> {
        self.path
    }
}
