use anyhow::{anyhow, bail};
use clap::{Args, ValueEnum};
use comfy_table::{CellAlignment, Table, presets::UTF8_FULL};
use rayon::prelude::*;
use tracing::{info, warn};
use wayfarer_core::{
    error::RoutingError,
    routing::{
        astar::AStar,
        bellman_ford::BellmanFord,
        dijkstra::Dijkstra,
        observer::TracingObserver,
        path_record::PathRecord,
        shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathData, ShortestPathSolution},
    },
    types::NodeId,
    weighting::find_weighting_profile,
};

use crate::grid;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    Astar,
    /// Every algorithm, run concurrently on the same graph
    All,
}

impl Algorithm {
    fn expand(self) -> Vec<Algorithm> {
        match self {
            Algorithm::All => vec![Algorithm::Dijkstra, Algorithm::BellmanFord, Algorithm::Astar],
            algorithm => vec![algorithm],
        }
    }
}

#[derive(Args)]
pub struct RouteArgs {
    /// Number of rows of the road grid
    #[arg(long, default_value_t = 40)]
    rows: usize,

    /// Number of columns of the road grid
    #[arg(long, default_value_t = 40)]
    columns: usize,

    /// Origin node, defaults to the south-west corner
    #[arg(short, long, default_value_t = 0)]
    origin: NodeId,

    /// Destination node, defaults to the north-east corner
    #[arg(long)]
    destination: Option<NodeId>,

    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Weighting profile, see `wayfarer profiles`
    #[arg(short, long, env = "WAYFARER_PROFILE", default_value = "shortest")]
    profile: String,

    /// Seed of the generated grid
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Log every search event
    #[arg(long)]
    trace: bool,

    /// Print the path found by the first algorithm as JSON
    #[arg(long)]
    record: bool,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    if args.rows == 0 || args.columns == 0 {
        bail!("The grid needs at least one row and one column");
    }

    let profile = find_weighting_profile(&args.profile).ok_or_else(|| {
        anyhow!(
            "Unknown profile '{}', run `wayfarer profiles` for the list",
            args.profile
        )
    })?;

    let graph = grid::generate(args.rows, args.columns, args.seed)?;
    info!(
        graph = graph.id(),
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "Generated road grid"
    );

    let destination = args.destination.unwrap_or(graph.node_count() - 1);
    let data = ShortestPathData::new(&graph, args.origin, destination, profile.weighting());

    let solutions = args
        .algorithm
        .expand()
        .par_iter()
        .map(|algorithm| solve(*algorithm, data, args.trace))
        .collect::<Result<Vec<_>, _>>()?;

    for solution in &solutions {
        info!("{}", solution);
    }

    let costs: Vec<f64> = solutions.iter().filter_map(|solution| solution.cost()).collect();
    let partially_feasible = !costs.is_empty() && costs.len() != solutions.len();
    if partially_feasible || costs.windows(2).any(|pair| (pair[0] - pair[1]).abs() > 1e-6) {
        warn!("Algorithms disagree on the cost of the path");
    }

    println!("{}", solutions_table(&solutions));

    if args.record {
        match solutions.first().and_then(|solution| solution.path()) {
            Some(path) => match PathRecord::from_path(path) {
                Some(record) => println!("{}", record.to_json()?),
                None => warn!("Empty path, nothing to record"),
            },
            None => warn!("No path found, nothing to record"),
        }
    }

    Ok(())
}

fn solve<'g>(
    algorithm: Algorithm,
    data: ShortestPathData<'g>,
    trace: bool,
) -> Result<ShortestPathSolution<'g>, RoutingError> {
    let mut search: Box<dyn ShortestPathAlgorithm<'g, 'static> + 'g> = match algorithm {
        Algorithm::Dijkstra => Box::new(Dijkstra::new(data)),
        Algorithm::BellmanFord => Box::new(BellmanFord::new(data)),
        Algorithm::Astar | Algorithm::All => Box::new(AStar::new(data)),
    };

    if trace {
        search.add_observer(Box::new(TracingObserver));
    }

    search.run()
}

fn solutions_table(solutions: &[ShortestPathSolution<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Algorithm",
        "Status",
        "Cost",
        "Length (m)",
        "Travel time (s)",
        "Arcs",
        "Iterations",
        "Reached",
        "Marked",
        "Solving time",
    ]);

    for solution in solutions {
        let statistics = solution.statistics();
        let (cost, length, travel_time, arcs) = match (solution.cost(), solution.path()) {
            (Some(cost), Some(path)) => (
                format!("{cost:.2}"),
                format!("{:.2}", path.length()),
                format!("{:.2}", path.minimum_travel_time()),
                path.arc_ids().len().to_string(),
            ),
            _ => ("-".into(), "-".into(), "-".into(), "-".into()),
        };

        table.add_row(vec![
            solution.algorithm().to_string(),
            format!("{:?}", solution.status()),
            cost,
            length,
            travel_time,
            arcs,
            statistics.iterations.to_string(),
            statistics.reached_nodes.to_string(),
            statistics.marked_nodes.to_string(),
            format!("{:?}", solution.solving_time()),
        ]);
    }

    for index in 2..=8 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
