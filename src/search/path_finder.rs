use tracing::debug;

use crate::{
    graph::{Graph, VertexId},
    search::Walk,
    statistics::Stats,
};

impl Graph {
    /// Finds a simple path from `s` to `t` along which the gap between
    /// consecutive food-bearing vertices never exceeds `k` edges.
    ///
    /// The walk carries a steps-remaining counter that starts at `k` and is
    /// reset to `k` at every food vertex; a non-food vertex reached with the
    /// counter exhausted is a dead end. Reaching `t` always succeeds, even
    /// with the counter exhausted. The first path discovered in neighbor
    /// insertion order wins; no optimization over alternatives is performed.
    ///
    /// # Parameters
    /// - `s`: start vertex.
    /// - `t`: destination vertex.
    /// - `k`: maximum number of edges between consecutive food stops.
    ///
    /// # Returns
    /// The accepted path from `s` to `t` inclusive, or `None` if `s` or `t`
    /// is not a member of the graph, `k` is negative, or no simple path
    /// satisfies the food-interval bound.
    pub fn find_path(&self, s: VertexId, t: VertexId, k: i64) -> Option<Vec<VertexId>> {
        let mut stats = Stats::new();
        self.find_path_with_stats(s, t, k, &mut stats)
    }

    /// Same as [`find_path`](Graph::find_path), recording expansion and
    /// dead-end counts into `stats`.
    pub fn find_path_with_stats(
        &self,
        s: VertexId,
        t: VertexId,
        k: i64,
        stats: &mut Stats,
    ) -> Option<Vec<VertexId>> {
        if k < 0 || !self.contains(s) || !self.contains(t) {
            return None;
        }
        debug!(?s, ?t, k, "starting constrained path search");

        let mut walk = Walk::with_capacity(self.len());
        let found = self.walk_to(s, t, k, k, &mut walk, stats);
        debug!(
            found,
            expansions = stats.get_expansions(),
            dead_ends = stats.get_dead_ends(),
            "constrained path search finished"
        );
        found.then(|| walk.into_path())
    }

    // One DFS frame. `c` is the number of steps the colony can still take
    // upon arriving at `current` before it must eat again.
    //
    // Returns true once the target has been entered; the unwinding frames
    // then leave the walk untouched so the accepted path survives intact.
    fn walk_to(
        &self,
        current: VertexId,
        target: VertexId,
        k: i64,
        c: i64,
        walk: &mut Walk,
        stats: &mut Stats,
    ) -> bool {
        walk.enter(current);
        stats.bump_expansions();

        if current == target {
            return true;
        }

        let vert = self.vertex_ref(current);
        let budget = if vert.has_food() {
            k
        } else if c <= 0 {
            // Food ran out one step too late. Abandon the branch.
            stats.bump_dead_ends();
            walk.leave(current);
            return false;
        } else {
            c
        };

        for &next in vert.edges() {
            if !walk.seen(next) && self.walk_to(next, target, k, budget - 1, walk, stats) {
                return true;
            }
        }

        walk.leave(current);
        false
    }
}
