use clap::{Parser, Subcommand};
use forage::{
    fs::{LocationSpec, QuerySpec, Scenario},
    statistics::Stats,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{io, path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Constrained path queries over mazes of food-carrying locations
#[derive(Parser, Debug)]
#[command(name = "forage")]
#[command(about = "Answers food-constrained reachability queries over location mazes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scenario file and run its queries
    Query {
        /// Path to the scenario file (JSON)
        scenario: PathBuf,

        /// Print per-query search statistics
        #[arg(long)]
        stats: bool,
    },
    /// Generate a random scenario file
    Generate {
        /// Number of locations in the maze
        #[arg(long, default_value_t = 12)]
        locations: usize,

        /// Probability of a track between two non-consecutive locations
        #[arg(long, default_value_t = 0.2)]
        track_probability: f64,

        /// Probability that a location carries food
        #[arg(long, default_value_t = 0.3)]
        food_probability: f64,

        /// Number of random queries to include
        #[arg(long, default_value_t = 4)]
        queries: usize,

        /// RNG seed for reproducible scenarios
        #[arg(long)]
        seed: Option<u64>,

        /// Where to write the scenario
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn run_queries(path: &PathBuf, want_stats: bool) -> io::Result<()> {
    let scenario = Scenario::load(path)?;
    let maze = scenario.build()?;
    println!(
        "Maze loaded: {} locations, {} tracks, {} queries",
        maze.graph.len(),
        scenario.tracks.len(),
        scenario.queries.len()
    );

    let mut combined = Stats::new();
    for (i, query) in scenario.queries.iter().enumerate() {
        let mut stats = Stats::new();
        match query {
            QuerySpec::FindPath { from, to, max_gap } => {
                let s = maze.resolve(from)?;
                let t = maze.resolve(to)?;
                match maze.graph.find_path_with_stats(s, t, *max_gap, &mut stats) {
                    Some(path) => println!(
                        "[{i}] find_path {from} -> {to} (max_gap {max_gap}): {}",
                        maze.render_path(&path).join(" -> ")
                    ),
                    None => println!(
                        "[{i}] find_path {from} -> {to} (max_gap {max_gap}): no viable path"
                    ),
                }
            }
            QuerySpec::ExtraFood {
                from,
                to,
                max_gap,
                budget,
            } => {
                let s = maze.resolve(from)?;
                let t = maze.resolve(to)?;
                let feasible = maze
                    .graph
                    .exists_path_with_extra_food_stats(s, t, *max_gap, *budget, &mut stats);
                println!(
                    "[{i}] extra_food {from} -> {to} (max_gap {max_gap}, budget {budget}): {feasible}"
                );
            }
        }
        if want_stats {
            println!(
                "    {} expansions, {} dead ends, {} tokens spent",
                stats.get_expansions(),
                stats.get_dead_ends(),
                stats.get_tokens_spent()
            );
        }
        combined = combined.merge(&stats);
    }

    if want_stats && !scenario.queries.is_empty() {
        println!(
            "Total: {} expansions, {} dead ends, {} tokens spent",
            combined.get_expansions(),
            combined.get_dead_ends(),
            combined.get_tokens_spent()
        );
    }
    Ok(())
}

fn generate(
    locations: usize,
    track_probability: f64,
    food_probability: f64,
    query_count: usize,
    seed: Option<u64>,
    output: &PathBuf,
) -> io::Result<()> {
    if locations < 2 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "a scenario needs at least 2 locations",
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let name = |i: usize| format!("L{i}");
    let specs: Vec<LocationSpec> = (0..locations)
        .map(|i| LocationSpec {
            name: name(i),
            has_food: rng.random_bool(food_probability),
        })
        .collect();

    // A spine of consecutive tracks keeps the maze connected; extra tracks
    // are sprinkled on top.
    let mut tracks: Vec<(String, String)> = (1..locations).map(|i| (name(i - 1), name(i))).collect();
    for i in 0..locations {
        for j in (i + 2)..locations {
            if rng.random_bool(track_probability) {
                tracks.push((name(i), name(j)));
            }
        }
    }

    let queries: Vec<QuerySpec> = (0..query_count)
        .map(|_| {
            let from = name(rng.random_range(0..locations));
            let to = name(rng.random_range(0..locations));
            let max_gap = rng.random_range(1..=4);
            if rng.random_bool(0.5) {
                QuerySpec::FindPath { from, to, max_gap }
            } else {
                QuerySpec::ExtraFood {
                    from,
                    to,
                    max_gap,
                    budget: rng.random_range(0..=3),
                }
            }
        })
        .collect();

    let scenario = Scenario {
        locations: specs,
        tracks,
        queries,
    };
    scenario.save(output)?;
    println!(
        "Scenario with {} locations and {} tracks written to {}",
        locations,
        scenario.tracks.len(),
        output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let result = match &args.command {
        Command::Query { scenario, stats } => run_queries(scenario, *stats),
        Command::Generate {
            locations,
            track_probability,
            food_probability,
            queries,
            seed,
            output,
        } => generate(
            *locations,
            *track_probability,
            *food_probability,
            *queries,
            *seed,
            output,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
