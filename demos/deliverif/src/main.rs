//! deliverif — command-line front end for the delivery-request editor.
//!
//! ```text
//! deliverif inspect  --graph data/smallPlan.xml --request data/smallRequest.xml
//! deliverif edit     --graph data/smallPlan.xml --request data/smallRequest.xml \
//!                    --script data/clicks.txt -o mine.xml
//! deliverif solve    --graph data/smallPlan.xml --request mine.xml --couriers 2 --csv out/
//! deliverif catalog
//! deliverif upload   mine.xml
//! ```
//!
//! Service settings come from `DELIVERIF_*` variables (optionally in
//! `./.env.local`); flags override them.

mod edit;
mod inspect;
mod remote;
mod script;
mod service;
mod solve;


use clap::{Parser, Subcommand};
use tracing::Level;

use crate::edit::EditArgs;
use crate::inspect::InspectArgs;
use crate::remote::UploadArgs;
use crate::service::ServiceArgs;
use crate::solve::SolveArgs;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log per-click detail.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a graph document and, optionally, a request against it.
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
    /// Replay an editor script and export the resulting request.
    Edit {
        #[command(flatten)]
        args: EditArgs,
    },
    /// Ask the solver for routes and print the per-courier overlay.
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// List the documents stored on the service.
    Catalog {
        #[command(flatten)]
        service: ServiceArgs,
    },
    /// Store a request document on the service.
    Upload {
        #[command(flatten)]
        args: UploadArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match cli.command {
        Commands::Inspect { args } => inspect::run(args)?,
        Commands::Edit { args } => edit::run(args)?,
        Commands::Solve { args } => solve::run(args).await?,
        Commands::Catalog { service } => remote::catalog(service).await?,
        Commands::Upload { args } => remote::upload(args).await?,
    }

    Ok(())
}
