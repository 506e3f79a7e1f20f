//! The maze data model: uniquely-identified vertices and the undirected
//! simple graph that owns them.
//!
//! Structural mutation goes through [`Graph::add_vertex`],
//! [`Graph::fix_edge`] and [`Graph::block_edge`], which report invalid
//! requests as `false` returns and keep the simple-graph invariants intact.
//! The constrained path queries live in [`crate::search`] as further
//! `impl Graph` blocks.

mod simple_graph;
mod vertex;

pub use simple_graph::*;
pub use vertex::*;
