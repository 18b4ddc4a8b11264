//! `deliverif solve`: request routes and print the overlay of each courier.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use tracing::info;

use dv_core::EditorConfig;
use dv_graph::parse_graph;
use dv_overlay::{compute_overlays, CourierOverlay, CsvOverlayWriter, OverlayWriter};
use dv_request::parse_request;
use dv_solver::{DocumentSource, SolverClient};

use crate::service::ServiceArgs;

#[derive(Args)]
pub struct SolveArgs {
    /// Local graph document, sent inline
    #[arg(short, long, conflicts_with = "graph_name", required_unless_present = "graph_name")]
    graph: Option<PathBuf>,

    /// Graph document stored on the service
    #[arg(long)]
    graph_name: Option<String>,

    /// Local request document, sent inline
    #[arg(short, long, conflicts_with = "request_name", required_unless_present = "request_name")]
    request: Option<PathBuf>,

    /// Request document stored on the service
    #[arg(long)]
    request_name: Option<String>,

    /// Also write overlay_stops.csv and overlay_arrows.csv here
    #[arg(long)]
    csv: Option<PathBuf>,

    #[command(flatten)]
    service: ServiceArgs,
}

pub async fn run(args: SolveArgs) -> Result<()> {
    let client = args.service.client()?;

    let (graph_xml, graph_src) =
        document(&client, args.graph.as_ref(), args.graph_name.as_deref(), Kind::Plan).await?;
    let (request_xml, request_src) = document(
        &client,
        args.request.as_ref(),
        args.request_name.as_deref(),
        Kind::Request,
    )
    .await?;

    // Parse locally first: the overlay needs both models, and a broken
    // document should not cost a solver run.
    let graph = parse_graph(&graph_xml, EditorConfig::default().fallback_bounds)
        .context("graph document")?;
    let request = parse_request(&request_xml).context("request document")?;

    let solution = client.solve(graph_src, request_src).await?;
    let overlays = compute_overlays(&graph, &request, &solution.courier_paths());

    println!("{} deliveries, {} courier(s)", solution.delivery_count, solution.courier_count);
    println!("{}", courier_table(&overlays));

    if let Some(dir) = &args.csv {
        let mut writer = CsvOverlayWriter::new(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        for o in &overlays {
            writer.write_overlay(o)?;
        }
        writer.finish()?;
        info!(dir = %dir.display(), "overlay exported");
    }
    Ok(())
}

#[derive(Copy, Clone)]
enum Kind {
    Plan,
    Request,
}

/// Document text for the local overlay plus how to reference it in the
/// solve call.
async fn document(
    client: &SolverClient,
    path:   Option<&PathBuf>,
    name:   Option<&str>,
    kind:   Kind,
) -> Result<(String, DocumentSource)> {
    match (path, name) {
        (Some(path), _) => {
            let xml = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok((xml.clone(), DocumentSource::Xml(xml)))
        }
        (None, Some(name)) => {
            let xml = match kind {
                Kind::Plan => client.fetch_plan(name).await,
                Kind::Request => client.fetch_request(name).await,
            }
            .with_context(|| format!("fetching {name}"))?;
            Ok((xml, DocumentSource::Name(name.to_owned())))
        }
        (None, None) => anyhow::bail!("a local file or a stored document name is required"),
    }
}

fn courier_table(overlays: &[CourierOverlay]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["courier", "color", "stops", "visits", "length km"]);
    for o in overlays {
        let visits: Vec<String> = o.stops.iter().map(|s| s.label_with_order()).collect();
        table.add_row(vec![
            (o.courier_index + 1).to_string(),
            o.color.to_owned(),
            o.stops.len().to_string(),
            visits.join(" → "),
            format!("{:.2}", o.length_m() / 1000.0),
        ]);
    }
    table
}
