//! PowerDMS public-document exporter.
//!
//! Resolves a human-facing public portal URL to the site's JSON document
//! API, fetches the document tree, flattens it into (name, URL) records,
//! and renders two artifacts: a CSV record table and a POSIX shell
//! script that downloads every file.
//!
//! # Quick Start
//!
//! ```no_run
//! use powerdms_export::{emit, flatten, PortalClient, SiteEndpoint};
//!
//! #[tokio::main]
//! async fn main() -> powerdms_export::Result<()> {
//!     let endpoint =
//!         SiteEndpoint::resolve("https://public.powerdms.com/MassStatePolice/tree/147101")?;
//!
//!     let client = PortalClient::new()?;
//!     let tree = client.fetch_tree(&endpoint.api_url).await?;
//!
//!     let records = flatten(&tree);
//!     let artifacts = emit(&records, &endpoint.site_id)?;
//!     println!("{}", artifacts.csv);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! The stages run strictly in sequence and each is usable on its own:
//!
//! - [`SiteEndpoint::resolve`] - portal URL to API endpoint, no I/O
//! - [`PortalClient::fetch_tree`] - the only network round trip(s)
//! - [`flatten`] - depth-first pre-order walk of the tree
//! - [`emit`] - in-memory rendering of both artifacts
//!
//! Every failure is an [`ExportError`] and is terminal for the run; the
//! CLI binary translates it to a one-line message on stderr.

pub mod cli;

mod artifacts;
mod client;
mod error;
mod resolve;
mod sanitize;
mod tree;

// Re-export core types
pub use artifacts::{download_dir, emit, Artifacts};
pub use client::PortalClient;
pub use error::{ExportError, Result};
pub use resolve::SiteEndpoint;
pub use sanitize::safe_filename;
pub use tree::{flatten, DocumentNode, DocumentRecord, FolderNode, Node};
