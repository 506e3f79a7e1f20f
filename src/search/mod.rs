//! Constrained path queries over the maze graph.
//!
//! Both entry points are `impl Graph` blocks: [`Graph::find_path`] answers
//! whether (and how) the colony can cross the maze without ever walking more
//! than `k` edges between food stops, and
//! [`Graph::exists_path_with_extra_food`] answers whether granting food to a
//! bounded number of extra locations would make such a crossing possible.
//!
//! All search state is query-local (see [`Walk`]), so queries take `&self`
//! and may run concurrently on a shared graph.
//!
//! [`Graph::find_path`]: crate::graph::Graph::find_path
//! [`Graph::exists_path_with_extra_food`]: crate::graph::Graph::exists_path_with_extra_food

mod feasibility;
mod path_finder;
mod walk;

pub(crate) use walk::Walk;
