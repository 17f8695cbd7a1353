//! Plain-text road network loader.
//!
//! # Format
//!
//! ```text
//! # comments and blank lines are ignored
//! V E
//! src dest weight [road_type]     ← E road lines
//! x y [label words…]              ← up to V coordinate lines, ids 0, 1, …
//! ```
//!
//! Malformed road lines (too few fields, non-numeric fields, endpoints
//! outside `[0, V)`, non-positive weights) are skipped with a warning rather
//! than failing the load.  Coordinate lines whose `x` or `y` is missing,
//! non-numeric, or non-finite are skipped.  Coordinate lines without a label
//! take one from [`DEFAULT_LABELS`] by position, then fall back to
//! `"Node {i}"`.

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use er_core::{NodeId, Position, SimRng};
use er_network::{RoadGraph, RoadType};

/// Labels given to unlabelled nodes, by node id.  "Hospital" and
/// "Emergency" entries become hospitals with seeded capacity.
pub const DEFAULT_LABELS: [&str; 12] = [
    "Central Hospital",
    "North Gate",
    "East Junction",
    "South Hub",
    "West Side",
    "Uptown",
    "Industrial Pk",
    "Downtown",
    "River Rd",
    "Emergency N",
    "Clinic S",
    "Factory W",
];

/// Parse `text` into a [`RoadGraph`], drawing default hospital capacity
/// from `rng`.
pub fn parse_graph(text: &str, rng: &mut SimRng) -> Result<RoadGraph> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let Some((_, header)) = lines.next() else {
        bail!("graph input is empty");
    };
    let (vertex_count, edge_count) = parse_header(header)?;
    let mut graph = RoadGraph::new(vertex_count);

    // ── Roads ─────────────────────────────────────────────────────────────
    let mut skipped = 0usize;
    for (line_no, line) in lines.by_ref().take(edge_count) {
        match parse_road(line) {
            Some((u, v, w, kind)) => {
                if let Err(e) = graph.add_edge(u, v, w, kind) {
                    warn!(line = line_no + 1, %line, error = %e, "skipping invalid road");
                    skipped += 1;
                }
            }
            None => {
                warn!(line = line_no + 1, %line, "skipping malformed road line");
                skipped += 1;
            }
        }
    }

    // ── Coordinates ───────────────────────────────────────────────────────
    let mut next_id = 0usize;
    for (_, line) in lines {
        if next_id >= vertex_count {
            break;
        }
        let mut fields = line.split_whitespace();
        let x = fields.next().and_then(|f| f.parse::<f32>().ok());
        let y = fields.next().and_then(|f| f.parse::<f32>().ok());
        let (Some(x), Some(y)) = (x, y) else { continue };
        if !(x.is_finite() && y.is_finite()) {
            warn!(%line, "skipping non-finite coordinate line");
            continue;
        }

        let rest: Vec<&str> = fields.collect();
        let label = if rest.is_empty() {
            DEFAULT_LABELS
                .get(next_id)
                .map(|l| (*l).to_owned())
                .unwrap_or_else(|| format!("Node {next_id}"))
        } else {
            rest.join(" ")
        };

        graph.assign_coordinates(NodeId(next_id as u32), Position::new(x, y), label, rng)?;
        next_id += 1;
    }

    info!(
        nodes = vertex_count,
        roads = graph.road_count(),
        skipped,
        placed = next_id,
        "graph loaded"
    );
    Ok(graph)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let v = fields
        .next()
        .context("missing vertex count")?
        .parse::<usize>()
        .context("invalid header format, expected 'V E'")?;
    let e = fields
        .next()
        .context("missing edge count")?
        .parse::<usize>()
        .context("invalid header format, expected 'V E'")?;
    Ok((v, e))
}

/// `None` when the line does not have three numeric leading fields.
/// Range and weight checks are left to [`RoadGraph::add_edge`].
fn parse_road(line: &str) -> Option<(NodeId, NodeId, f64, RoadType)> {
    let mut fields = line.split_whitespace();
    let u = fields.next()?.parse::<u32>().ok()?;
    let v = fields.next()?.parse::<u32>().ok()?;
    let w = fields.next()?.parse::<f64>().ok()?;
    let kind = fields
        .next()
        .map(|t| t.parse::<RoadType>().unwrap_or_default())
        .unwrap_or_default();
    Some((NodeId(u), NodeId(v), w, kind))
}
