//! `deliverif edit`: drive the editor from a script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use dv_core::{EditorConfig, GeoPoint};
use dv_editor::{Editor, EditorError, EditorObserver, StateKind};
use dv_graph::SpatialIndexResolver;

use crate::script::{parse_script, ScriptCommand};

#[derive(Args)]
pub struct EditArgs {
    /// Graph document (XML)
    #[arg(short, long)]
    graph: PathBuf,

    /// Request document to start from (XML)
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Editor script, one action per line
    #[arg(short, long)]
    script: PathBuf,

    /// Where to write the exported request; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop at the first rejected action instead of carrying on
    #[arg(long)]
    strict: bool,
}

/// Prints what the operator would see on screen.
#[derive(Default)]
struct StatusLine {
    warnings: usize,
}

impl EditorObserver for StatusLine {
    fn on_transition(&mut self, _from: StateKind, to: StateKind) {
        println!("  [{to}] {}", to.prompt());
    }

    fn on_warning(&mut self, error: &EditorError) {
        self.warnings += 1;
        println!("  ! {error}");
    }

    fn on_idle_click(&mut self, pos: GeoPoint) {
        println!("  click at {pos} (no action selected)");
    }
}

pub fn run(args: EditArgs) -> Result<()> {
    let mut editor = Editor::with_resolver(EditorConfig::default(), SpatialIndexResolver);

    let xml = std::fs::read_to_string(&args.graph)
        .with_context(|| format!("reading {}", args.graph.display()))?;
    editor.load_graph(&xml).with_context(|| format!("loading {}", args.graph.display()))?;

    if let Some(path) = &args.request {
        let xml = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        editor.load_request(&xml).with_context(|| format!("loading {}", path.display()))?;
    }

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let script = parse_script(&text)?;
    info!(actions = script.len(), "replaying script");

    let mut status = StatusLine::default();
    for step in script {
        println!("{:>4}: {:?}", step.line, step.command);
        let outcome = match step.command {
            ScriptCommand::Event(event) => editor.dispatch(event, &mut status).map(|_| ()),
            ScriptCommand::RemoveDelivery(i) => editor.remove_delivery(i).map(|d| {
                println!("  removed {} ({} → {})", d.id, d.pickup_node_id, d.delivery_node_id);
            }),
            ScriptCommand::RemoveStaged(i) => editor.remove_staged(i).map(|p| {
                println!("  unstaged {} → {}", p.pickup.node_id, p.delivery.node_id);
            }),
            ScriptCommand::ClearCollected => {
                editor.clear_collected();
                Ok(())
            }
        };
        if let Err(e) = outcome {
            // dispatch already reported through the observer
            if !matches!(step.command, ScriptCommand::Event(_)) {
                status.on_warning(&e);
            }
            if args.strict {
                return Err(e).with_context(|| format!("script line {}", step.line));
            }
        }
    }

    if !editor.state().is_idle() {
        warn!(
            state = %editor.state().kind(),
            "script ended mid-flow; pending stops are not exported"
        );
    }
    if let Some(pos) = editor.user_location() {
        println!("user location: {pos}");
    }
    println!(
        "staged pairs: {}, collected nodes: {}, warnings: {}",
        editor.staged().len(),
        editor.collected().len(),
        status.warnings
    );

    let document = editor.export_document()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &document).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "request exported");
        }
        None => print!("{document}"),
    }
    Ok(())
}
