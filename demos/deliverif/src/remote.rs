//! `deliverif catalog` and `deliverif upload`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dv_request::parse_request;
use dv_solver::DocumentCatalog;

use crate::service::ServiceArgs;

#[derive(Args)]
pub struct UploadArgs {
    /// Request document to upload
    file: PathBuf,

    /// Name to store it under; defaults to the file name
    #[arg(short, long)]
    name: Option<String>,

    #[command(flatten)]
    service: ServiceArgs,
}

pub async fn catalog(service: ServiceArgs) -> Result<()> {
    let client = service.client()?;
    let mut catalog = DocumentCatalog::new();
    catalog.refresh(&client).await.context("listing stored documents")?;

    println!("plans ({}):", catalog.plans().len());
    for p in catalog.plans() {
        println!("  {p}");
    }
    println!("requests ({}):", catalog.requests().len());
    for r in catalog.requests() {
        println!("  {r}");
    }
    Ok(())
}

pub async fn upload(args: UploadArgs) -> Result<()> {
    let xml = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    // Never store a document that could not be loaded back.
    parse_request(&xml).with_context(|| format!("{} is not a valid request", args.file.display()))?;

    let name = match &args.name {
        Some(n) => n.clone(),
        None => args
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .context("file path has no file name")?,
    };

    let receipt = args.service.client()?.upload_request(&name, xml).await?;
    println!("{} ({})", receipt.message, receipt.filename);
    Ok(())
}
