//! CLI argument parsing types.

use std::path::PathBuf;

use clap::Parser;

/// Export the public document listing of a PowerDMS portal.
///
/// Produces `<site>_documents.csv` and `download_<site>.sh` in the
/// current directory; the script fetches every listed document when run.
#[derive(Parser, Debug)]
#[command(name = "powerdms-export", version)]
pub struct Cli {
    /// Public portal URL, e.g. "https://public.powerdms.com/MassStatePolice/tree/147101".
    pub url: String,

    /// Write the record table to this path instead of <site>_documents.csv.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the download script to this path instead of download_<site>.sh.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,
}
