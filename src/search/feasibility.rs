use tracing::debug;

use crate::{
    graph::{Graph, VertexId},
    search::Walk,
    statistics::Stats,
};

impl Graph {
    /// Decides whether a simple path from `s` to `t` satisfying the
    /// `k`-step food-interval rule can be made to exist by granting food to
    /// at most `x` vertices that currently lack it.
    ///
    /// This is an existence question only: the search neither reports which
    /// vertices would receive food nor minimizes how many are needed. The
    /// token budget is forked per recursive call (each branch gets its own
    /// copy of the remaining count), so a token spent down an abandoned
    /// branch is automatically available again to its siblings.
    ///
    /// # Parameters
    /// - `s`: start vertex.
    /// - `t`: destination vertex.
    /// - `k`: maximum number of edges between consecutive food stops.
    /// - `x`: number of food placements the searcher may grant.
    ///
    /// # Returns
    /// `true` iff some simple path exists whose food gaps can all be closed
    /// with at most `x` placements along that path. `false` for non-member
    /// endpoints or negative `k`/`x`.
    pub fn exists_path_with_extra_food(&self, s: VertexId, t: VertexId, k: i64, x: i64) -> bool {
        let mut stats = Stats::new();
        self.exists_path_with_extra_food_stats(s, t, k, x, &mut stats)
    }

    /// Same as [`exists_path_with_extra_food`](Graph::exists_path_with_extra_food),
    /// recording expansion, dead-end and token counts into `stats`.
    pub fn exists_path_with_extra_food_stats(
        &self,
        s: VertexId,
        t: VertexId,
        k: i64,
        x: i64,
        stats: &mut Stats,
    ) -> bool {
        if k < 0 || x < 0 || !self.contains(s) || !self.contains(t) {
            return false;
        }
        debug!(?s, ?t, k, x, "starting feasibility search");

        let mut walk = Walk::with_capacity(self.len());
        let feasible = self.walk_feasible(s, t, k, k, x, &mut walk, stats);
        debug!(
            feasible,
            expansions = stats.get_expansions(),
            tokens_spent = stats.get_tokens_spent(),
            "feasibility search finished"
        );
        feasible
    }

    // One DFS frame. `c` is steps remaining upon arrival, `f` the food
    // tokens this branch may still spend. Both travel by value: siblings
    // never observe each other's spending.
    fn walk_feasible(
        &self,
        current: VertexId,
        target: VertexId,
        k: i64,
        c: i64,
        f: i64,
        walk: &mut Walk,
        stats: &mut Stats,
    ) -> bool {
        walk.enter(current);
        stats.bump_expansions();

        if current == target {
            walk.leave(current);
            return true;
        }

        let vert = self.vertex_ref(current);
        let (budget, tokens) = if vert.has_food() {
            (k, f)
        } else if c <= 0 && f > 0 {
            // Starving, but we may still choose to place food here.
            stats.bump_tokens_spent();
            (k, f - 1)
        } else if c <= 0 {
            stats.bump_dead_ends();
            walk.leave(current);
            return false;
        } else {
            (c, f)
        };

        for &next in vert.edges() {
            if !walk.seen(next)
                && self.walk_feasible(next, target, k, budget - 1, tokens, walk, stats)
            {
                walk.leave(current);
                return true;
            }
        }

        walk.leave(current);
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, Vertex, VertexId};
    use crate::statistics::Stats;

    fn member(graph: &mut Graph, has_food: bool) -> VertexId {
        let v = Vertex::new(has_food);
        let id = v.id();
        assert!(graph.add_vertex(v));
        id
    }

    /// A---B---C---D---E with food only at E.
    fn hungry_chain() -> (Graph, [VertexId; 5]) {
        let mut graph = Graph::new();
        let ids = [false, false, false, false, true].map(|f| member(&mut graph, f));
        for pair in ids.windows(2) {
            assert!(graph.fix_edge(pair[0], pair[1]));
        }
        (graph, ids)
    }

    #[test]
    fn test_no_budget_cannot_cross_the_gap() {
        let (graph, [a, _, _, _, e]) = hungry_chain();
        assert!(!graph.exists_path_with_extra_food(a, e, 2, 0));
    }

    #[test]
    fn test_single_placement_closes_the_gap() {
        let (graph, [a, _, _, _, e]) = hungry_chain();
        assert!(graph.exists_path_with_extra_food(a, e, 2, 1));
    }

    #[test]
    fn test_tight_bound_with_generous_budget() {
        let (graph, [a, _, _, _, e]) = hungry_chain();
        assert!(graph.exists_path_with_extra_food(a, e, 1, 6));
    }

    #[test]
    fn test_negative_parameters_fail() {
        let (graph, [a, _, _, _, e]) = hungry_chain();
        assert!(!graph.exists_path_with_extra_food(a, e, -1, 3));
        assert!(!graph.exists_path_with_extra_food(a, e, 2, -1));
    }

    #[test]
    fn test_non_member_endpoints_fail() {
        let (graph, [a, ..]) = hungry_chain();
        let outsider = Vertex::new(true).id();
        assert!(!graph.exists_path_with_extra_food(a, outsider, 2, 2));
        assert!(!graph.exists_path_with_extra_food(outsider, a, 2, 2));
    }

    #[test]
    fn test_start_equals_target_needs_nothing() {
        let (graph, [a, ..]) = hungry_chain();
        assert!(graph.exists_path_with_extra_food(a, a, 0, 0));
    }

    #[test]
    fn test_natural_food_answers_match_plain_search() {
        // Food at C and E: with a zero budget the feasibility question
        // degenerates to plain path finding.
        let mut graph = Graph::new();
        let ids = [false, false, true, false, true].map(|f| member(&mut graph, f));
        for pair in ids.windows(2) {
            assert!(graph.fix_edge(pair[0], pair[1]));
        }
        let [a, _, _, _, e] = ids;

        assert!(graph.exists_path_with_extra_food(a, e, 2, 0));
        assert_eq!(
            graph.find_path(a, e, 1).is_some(),
            graph.exists_path_with_extra_food(a, e, 1, 0)
        );
    }

    #[test]
    fn test_tokens_spent_down_a_dead_end_return_to_siblings() {
        // s --- a1 --- a2 --- a3   (token-eating dead end, tried first)
        //  \--- b1 --- t
        //
        // With k=1 and x=2, the first branch burns both tokens before
        // hitting its dead end; the second branch still needs one. Only a
        // per-branch budget makes this come out true.
        let mut graph = Graph::new();
        let s = member(&mut graph, false);
        let a1 = member(&mut graph, false);
        let a2 = member(&mut graph, false);
        let a3 = member(&mut graph, false);
        let b1 = member(&mut graph, false);
        let t = member(&mut graph, false);
        assert!(graph.fix_edge(s, a1));
        assert!(graph.fix_edge(a1, a2));
        assert!(graph.fix_edge(a2, a3));
        assert!(graph.fix_edge(s, b1));
        assert!(graph.fix_edge(b1, t));

        assert!(graph.exists_path_with_extra_food(s, t, 1, 2));
    }

    #[test]
    fn test_budget_is_shared_along_a_single_path() {
        // One long chain, two gaps to close, one token: infeasible.
        let mut graph = Graph::new();
        let ids = [false, false, false, false, false, true].map(|f| member(&mut graph, f));
        for pair in ids.windows(2) {
            assert!(graph.fix_edge(pair[0], pair[1]));
        }
        let (a, t) = (ids[0], ids[5]);

        assert!(!graph.exists_path_with_extra_food(a, t, 2, 1));
        assert!(graph.exists_path_with_extra_food(a, t, 2, 2));
    }

    #[test]
    fn test_repeated_query_is_idempotent() {
        let (graph, [a, _, _, _, e]) = hungry_chain();
        for _ in 0..3 {
            assert!(!graph.exists_path_with_extra_food(a, e, 2, 0));
            assert!(graph.exists_path_with_extra_food(a, e, 2, 1));
        }
    }

    #[test]
    fn test_random_mazes_budget_is_monotone() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        // Granting a bigger budget can never turn a feasible crossing
        // infeasible.
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..25 {
            let mut graph = Graph::new();
            let n = rng.random_range(2..10);
            let ids: Vec<VertexId> = (0..n)
                .map(|_| member(&mut graph, rng.random_bool(0.3)))
                .collect();
            for i in 0..n {
                for j in (i + 1)..n {
                    if rng.random_bool(0.35) {
                        assert!(graph.fix_edge(ids[i], ids[j]));
                    }
                }
            }

            let s = ids[rng.random_range(0..n)];
            let t = ids[rng.random_range(0..n)];
            let k = rng.random_range(0..3);

            let mut feasible_so_far = false;
            for x in 0..4 {
                let feasible = graph.exists_path_with_extra_food(s, t, k, x);
                assert!(
                    feasible || !feasible_so_far,
                    "feasibility regressed when budget grew to {x}"
                );
                feasible_so_far = feasible_so_far || feasible;
            }
        }
    }

    #[test]
    fn test_stats_count_token_spending() {
        let (graph, [a, _, _, _, e]) = hungry_chain();
        let mut stats = Stats::new();
        assert!(graph.exists_path_with_extra_food_stats(a, e, 2, 1, &mut stats));
        assert!(stats.get_tokens_spent() >= 1);
        assert!(stats.get_expansions() >= 5);
    }
}
