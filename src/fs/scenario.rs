use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::Path,
};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Graph, Vertex, VertexId};

/// One named location of a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSpec {
    pub name: String,
    #[serde(default)]
    pub has_food: bool,
}

/// One query of a scenario file, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuerySpec {
    FindPath {
        from: String,
        to: String,
        max_gap: i64,
    },
    ExtraFood {
        from: String,
        to: String,
        max_gap: i64,
        budget: i64,
    },
}

/// An on-disk maze description: named locations, symmetric tracks between
/// them, and the queries to run.
///
/// The JSON shape is
///
/// ```json
/// {
///   "locations": [ {"name": "A", "has_food": false} ],
///   "tracks":    [ ["A", "B"] ],
///   "queries":   [ {"kind": "find_path", "from": "A", "to": "B", "max_gap": 2} ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub locations: Vec<LocationSpec>,
    #[serde(default)]
    pub tracks: Vec<(String, String)>,
    #[serde(default)]
    pub queries: Vec<QuerySpec>,
}

/// A scenario materialized into a graph, keeping the name table so query
/// results can be rendered back as location names.
#[derive(Debug)]
pub struct BuiltMaze {
    pub graph: Graph,
    ids: HashMap<String, VertexId>,
    names: HashMap<VertexId, String>,
}

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

impl Scenario {
    pub fn load(path: &Path) -> io::Result<Scenario> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(io::Error::other)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(io::Error::other)
    }

    /// Materializes the scenario into a [`Graph`].
    ///
    /// Duplicate location names, tracks with unknown endpoints, and tracks
    /// the graph rejects (self-loops, duplicates) are all reported as
    /// `InvalidData` errors; a scenario that builds cleanly is guaranteed to
    /// satisfy the simple-graph invariants.
    pub fn build(&self) -> io::Result<BuiltMaze> {
        let mut graph = Graph::new();
        let mut ids = HashMap::with_capacity(self.locations.len());
        let mut names = HashMap::with_capacity(self.locations.len());

        for location in &self.locations {
            if ids.contains_key(&location.name) {
                return Err(invalid_data(format!(
                    "duplicate location name: {}",
                    location.name
                )));
            }
            let vertex = Vertex::new(location.has_food);
            let id = vertex.id();
            // A freshly minted vertex cannot collide.
            graph.add_vertex(vertex);
            ids.insert(location.name.clone(), id);
            names.insert(id, location.name.clone());
        }

        for (a, b) in &self.tracks {
            let u = *ids
                .get(a)
                .ok_or_else(|| invalid_data(format!("track references unknown location: {a}")))?;
            let v = *ids
                .get(b)
                .ok_or_else(|| invalid_data(format!("track references unknown location: {b}")))?;
            if !graph.fix_edge(u, v) {
                return Err(invalid_data(format!(
                    "track rejected (self-loop or duplicate): {a} -- {b}"
                )));
            }
        }

        debug!(
            locations = graph.len(),
            tracks = self.tracks.len(),
            queries = self.queries.len(),
            "scenario materialized"
        );
        Ok(BuiltMaze { graph, ids, names })
    }
}

impl BuiltMaze {
    /// Looks up a location by its scenario name.
    pub fn resolve(&self, name: &str) -> io::Result<VertexId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| invalid_data(format!("query references unknown location: {name}")))
    }

    /// Renders a path of vertex ids back into scenario names.
    pub fn render_path(&self, path: &[VertexId]) -> Vec<&str> {
        path.iter()
            .filter_map(|id| self.names.get(id).map(String::as_str))
            .collect()
    }
}
