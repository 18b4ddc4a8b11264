//! `deliverif inspect`: print what a graph and request contain.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use tracing::warn;

use dv_core::EditorConfig;
use dv_graph::{load_graph_file, GraphDocument};
use dv_request::{load_request_file, DeliveryRequest};

#[derive(Args)]
pub struct InspectArgs {
    /// Graph document (XML)
    #[arg(short, long)]
    graph: PathBuf,

    /// Request document to check against the graph (XML)
    #[arg(short, long)]
    request: Option<PathBuf>,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let config = EditorConfig::default();
    let graph = load_graph_file(&args.graph, config.fallback_bounds)
        .with_context(|| format!("loading {}", args.graph.display()))?;

    println!("graph {}", args.graph.display());
    println!("  nodes:    {}", graph.node_count());
    println!("  segments: {}", graph.segment_count());
    println!("  bounds:   {}", graph.bounds());
    println!("  diagonal: {:.0} m", graph.bounds().diagonal_m());

    if let Some(path) = &args.request {
        let request =
            load_request_file(path).with_context(|| format!("loading {}", path.display()))?;
        println!();
        print_request(&graph, &request);
    }
    Ok(())
}

fn print_request(graph: &GraphDocument, request: &DeliveryRequest) {
    let w = &request.warehouse;
    println!(
        "warehouse {} departing {}{}",
        w.node_id,
        w.departure,
        missing(graph, w.node_id.as_str())
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "id", "pickup", "pickup s", "delivery", "delivery s"]);
    for (i, d) in request.deliveries().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            d.id.to_string(),
            format!("{}{}", d.pickup_node_id, missing(graph, d.pickup_node_id.as_str())),
            d.pickup_duration.to_string(),
            format!("{}{}", d.delivery_node_id, missing(graph, d.delivery_node_id.as_str())),
            d.delivery_duration.to_string(),
        ]);
    }
    println!("{table}");
}

/// Marker for node ids the graph does not know.
fn missing(graph: &GraphDocument, id: &str) -> &'static str {
    if graph.contains(id) {
        ""
    } else {
        warn!(node = id, "request refers to a node missing from the graph");
        " (not in graph)"
    }
}
