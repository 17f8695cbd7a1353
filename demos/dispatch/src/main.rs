//! dispatch: command-line driver for the emergency routing engine.
//!
//! Loads a text road network (the bundled compact city grid by default),
//! applies any requested closures, then either routes between two nodes or
//! finds the nearest hospital with free capacity.
//!
//! ```text
//! dispatch --source 3 --dest 9 --severity non-critical --rush-hour
//! dispatch --source 7 --nearest --close 3-7 --close 7-10
//! RUST_LOG=debug dispatch --random-closures 2 --seed 7
//! ```

mod graph_text;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use er_core::{NodeId, QueryParams, SeverityMode, SimRng, TrafficFactor};
use er_network::RoadGraph;
use er_routing::{
    CongestionLevel, DijkstraRouter, HospitalOutcome, Route, RouteOutcome, Router,
    effective_weight, nearest_available_hospital,
};

use graph_text::parse_graph;

const DEFAULT_CITY: &str = include_str!("../data/city.txt");

/// Seed offsets for the independent RNG streams.
const CAPACITY_STREAM: u64 = 1;
const CLOSURE_STREAM:  u64 = 2;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about = "Fastest emergency routes over a road network with closures and congestion")]
struct Args {
    /// Road network text file.  Uses the bundled city grid when omitted.
    #[arg(long, env = "DISPATCH_GRAPH")]
    graph: Option<PathBuf>,

    /// Start node id.
    #[arg(long, default_value_t = 0)]
    source: u32,

    /// Destination node id.  Defaults to the last node.
    #[arg(long, conflicts_with = "nearest")]
    dest: Option<u32>,

    /// Route to the nearest hospital with free ICU or ER capacity instead.
    #[arg(long)]
    nearest: bool,

    /// `critical` ignores congestion; `non-critical` applies the traffic factor.
    #[arg(long, default_value = "critical")]
    severity: SeverityMode,

    /// Congestion multiplier, typically 0.5 to 3.0.
    #[arg(long, default_value_t = 1.0)]
    traffic: f64,

    /// Set the traffic factor to the rush-hour value, overriding `--traffic`.
    #[arg(long)]
    rush_hour: bool,

    /// Close the road between two nodes, written `u-v`.  Repeatable.
    #[arg(long = "close", value_name = "U-V")]
    closures: Vec<String>,

    /// Close this many randomly chosen roads.
    #[arg(long, default_value_t = 0)]
    random_closures: usize,

    /// Seed for hospital capacity and random closures.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl Args {
    fn query_params(&self) -> Result<QueryParams> {
        let traffic = TrafficFactor::new(self.traffic)?;
        if !traffic.is_typical() {
            warn!(%traffic, "traffic factor outside the usual 0.5x-3.0x range");
        }
        let params = QueryParams::new(self.severity, traffic);
        Ok(if self.rush_hour { params.rush_hour() } else { params })
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let params = args.query_params()?;
    let mut root_rng = SimRng::new(args.seed);

    let text = match &args.graph {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => DEFAULT_CITY.to_owned(),
    };
    let mut graph = parse_graph(&text, &mut root_rng.child(CAPACITY_STREAM))?;
    if graph.is_empty() {
        bail!("road network has no nodes");
    }

    apply_closures(&mut graph, &args, &mut root_rng.child(CLOSURE_STREAM))?;

    let source = NodeId(args.source);
    info!(source = %label(&graph, source), severity = %params.severity, traffic = %params.traffic, "query");

    if args.nearest {
        run_nearest(&graph, source, &params)
    } else {
        let dest = NodeId(args.dest.unwrap_or(graph.node_count() as u32 - 1));
        run_route(&graph, source, dest, &params)
    }
}

fn apply_closures(graph: &mut RoadGraph, args: &Args, rng: &mut SimRng) -> Result<()> {
    for spec in &args.closures {
        let (u, v) = spec
            .split_once('-')
            .with_context(|| format!("closure {spec:?} must be written u-v"))?;
        let u = NodeId(u.trim().parse().with_context(|| format!("bad node in {spec:?}"))?);
        let v = NodeId(v.trim().parse().with_context(|| format!("bad node in {spec:?}"))?);
        graph.close_edge(u, v)?;
        info!(road = %format!("{} → {}", label(graph, u), label(graph, v)), "road closed");
    }

    for _ in 0..args.random_closures {
        if let Some(road) = graph.close_random_road(rng) {
            let (u, v) = graph.road_ends(road)?;
            info!(road = %format!("{} → {}", label(graph, u), label(graph, v)), "road closed at random");
        }
    }
    Ok(())
}

fn run_route(graph: &RoadGraph, source: NodeId, dest: NodeId, params: &QueryParams) -> Result<()> {
    if graph.is_saturated_hospital(dest)? {
        warn!("{} is at full capacity", label(graph, dest));
    }

    match DijkstraRouter.route(graph, source, dest, params)? {
        RouteOutcome::Found(route) => print_route(graph, &route, params),
        RouteOutcome::NoPath { .. } => println!("No path exists"),
    }
    Ok(())
}

fn run_nearest(graph: &RoadGraph, source: NodeId, params: &QueryParams) -> Result<()> {
    match nearest_available_hospital(&DijkstraRouter, graph, source, params)? {
        HospitalOutcome::Found { hospital, capacity, route } => {
            println!(
                "Nearest Hospital: {} ({:.1} min) [{capacity}]",
                label(graph, hospital),
                route.total_cost
            );
            print_route(graph, &route, params);
        }
        HospitalOutcome::NoCapacity  => println!("No hospitals with capacity available"),
        HospitalOutcome::Unreachable => println!("Could not reach any hospital"),
    }
    Ok(())
}

fn print_route(graph: &RoadGraph, route: &Route, params: &QueryParams) {
    let names: Vec<&str> = route.path.iter().map(|&id| label(graph, id)).collect();
    println!("Fastest Route: {}", names.join(" → "));
    println!("Distance: {:.2} km", route.total_cost);
    println!("Estimated Time: {:.2} min", route.total_cost);

    for hop in route.path.windows(2) {
        // Cheapest parallel road between the pair, as the solver saw it.
        let cost = graph
            .out_edges(hop[0])
            .filter(|e| e.to == hop[1])
            .map(|e| effective_weight(e.weight, params))
            .fold(f64::INFINITY, f64::min);
        let level = CongestionLevel::classify(cost);
        println!("  {} → {}: {level}", label(graph, hop[0]), label(graph, hop[1]));
    }
}

fn label(graph: &RoadGraph, id: NodeId) -> &str {
    graph.label(id).unwrap_or("<unknown>")
}
