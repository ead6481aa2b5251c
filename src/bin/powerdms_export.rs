//! PowerDMS export CLI binary.
//!
//! One-shot pipeline: resolve the portal URL, fetch the document tree,
//! flatten it, render both artifacts in memory, then write them out.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use powerdms_export::cli::Cli;
use powerdms_export::{download_dir, emit, flatten, PortalClient, SiteEndpoint};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Progress goes to stderr via tracing; stdout carries only the final
    // summary so it stays pipeable.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("powerdms_export=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> powerdms_export::Result<()> {
    let endpoint = SiteEndpoint::resolve(&cli.url)?;
    tracing::info!(site = %endpoint.site_id, api = %endpoint.api_url, "resolved portal endpoint");

    let client = PortalClient::new()?;
    tracing::info!("fetching document list");
    let tree = client.fetch_tree(&endpoint.api_url).await?;

    let records = flatten(&tree);
    if records.is_empty() {
        tracing::warn!("no public documents were found at this endpoint");
        return Ok(());
    }
    tracing::info!(count = records.len(), "found document entries");

    let artifacts = emit(&records, &endpoint.site_id)?;

    let csv_path = cli
        .csv
        .unwrap_or_else(|| PathBuf::from(format!("{}_documents.csv", endpoint.site_id)));
    let script_path = cli
        .script
        .unwrap_or_else(|| PathBuf::from(format!("download_{}.sh", endpoint.site_id)));

    // Both artifacts are complete in memory before either file is opened,
    // so a failed run never leaves a partial artifact behind.
    fs::write(&csv_path, &artifacts.csv)?;
    fs::write(&script_path, &artifacts.script)?;

    println!(
        "Wrote {} document records to {}",
        records.len(),
        csv_path.display()
    );
    println!("Wrote download script to {}", script_path.display());
    println!(
        "To fetch the files into {}/, run:",
        download_dir(&endpoint.site_id)
    );
    println!("  chmod +x {}", script_path.display());
    println!("  ./{}", script_path.display());

    Ok(())
}
