//! Output artifact generation.
//!
//! Both artifacts are rendered fully in memory so the caller can write
//! them out atomically; nothing here touches the filesystem.

use std::collections::HashMap;

use crate::error::{ExportError, Result};
use crate::sanitize::safe_filename;
use crate::tree::DocumentRecord;

/// Fallback stem for names that sanitize to nothing.
const UNTITLED: &str = "untitled";

/// The rendered output artifacts for one site.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// CSV record table with a `name,url` header.
    pub csv: String,
    /// POSIX shell script that downloads every record.
    pub script: String,
}

/// Folder the generated script downloads into.
#[must_use]
pub fn download_dir(site_id: &str) -> String {
    format!("downloaded_{site_id}")
}

/// Render the record table and download script for `records`.
///
/// Duplicate sanitized filenames get an occurrence-counter suffix so no
/// download overwrites another.
///
/// # Errors
///
/// Returns [`ExportError::MalformedRecord`] if a record has an empty URL;
/// a directive with no target would fail at download time instead.
pub fn emit(records: &[DocumentRecord], site_id: &str) -> Result<Artifacts> {
    if let Some(record) = records.iter().find(|r| r.url.is_empty()) {
        return Err(ExportError::MalformedRecord {
            name: record.name.clone(),
        });
    }

    Ok(Artifacts {
        csv: render_csv(records)?,
        script: render_script(records, site_id),
    })
}

fn render_csv(records: &[DocumentRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "url"])?;
    for record in records {
        writer.write_record([&record.name, &record.url])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_script(records: &[DocumentRecord], site_id: &str) -> String {
    let dir = download_dir(site_id);
    let mut script = String::new();

    script.push_str("#!/bin/sh\n");
    script.push_str("# Auto-generated PowerDMS download script\n\n");
    script.push_str("# Create the download directory if it doesn't exist\n");
    script.push_str(&format!("mkdir -p {}\n\n", shell_quote(&dir)));

    let mut seen: HashMap<String, u32> = HashMap::new();
    for record in records {
        let mut stem = safe_filename(&record.name);
        if stem.is_empty() {
            stem = UNTITLED.to_string();
        }
        let count = seen.entry(stem.clone()).or_insert(0);
        *count += 1;
        let filename = if *count == 1 {
            format!("{stem}.pdf")
        } else {
            format!("{stem}_{count}.pdf")
        };

        script.push_str(&format!(
            "echo {}\n",
            shell_quote(&format!("Downloading: {}", record.name))
        ));
        script.push_str(&format!(
            "wget -U \"Mozilla/5.0\" --no-check-certificate -O {} {}\n\n",
            shell_quote(&format!("{dir}/{filename}")),
            shell_quote(&record.url)
        ));
    }

    script
}

/// Single-quote a string for POSIX shells.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, url: &str) -> DocumentRecord {
        DocumentRecord {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_round_trip_two_documents() {
        // Synthetic tree: folder A holds "Report 1" and folder B, which
        // holds "Report/2".
        let records = vec![
            record("Report 1", "https://example.com/u1"),
            record("Report/2", "https://example.com/u2"),
        ];

        let artifacts = emit(&records, "Test").unwrap();

        let rows: Vec<&str> = artifacts.csv.lines().collect();
        assert_eq!(rows[0], "name,url");
        assert_eq!(rows[1], "Report 1,https://example.com/u1");
        assert_eq!(rows[2], "Report/2,https://example.com/u2");
        assert_eq!(rows.len(), 3);

        assert!(artifacts.script.starts_with("#!/bin/sh\n"));
        assert!(artifacts.script.contains("'downloaded_Test/Report_1.pdf'"));
        assert!(artifacts.script.contains("'downloaded_Test/Report_2.pdf'"));
        assert_eq!(artifacts.script.matches("wget ").count(), 2);

        // Directory creation must precede every download directive.
        let mkdir_at = artifacts.script.find("mkdir -p 'downloaded_Test'").unwrap();
        let first_wget = artifacts.script.find("wget ").unwrap();
        assert!(mkdir_at < first_wget);
    }

    #[test]
    fn test_csv_quotes_awkward_names() {
        let records = vec![
            record("Use of Force, Appendix \"A\"", "u1"),
            record("multi\nline", "u2"),
        ];

        let artifacts = emit(&records, "Test").unwrap();
        assert!(artifacts
            .csv
            .contains("\"Use of Force, Appendix \"\"A\"\"\",u1"));
        assert!(artifacts.csv.contains("\"multi\nline\",u2"));
    }

    #[test]
    fn test_collision_gets_numeric_suffix() {
        let records = vec![
            record("Policy", "u1"),
            record("Policy", "u2"),
            record("Policy", "u3"),
        ];

        let artifacts = emit(&records, "Test").unwrap();
        assert!(artifacts.script.contains("'downloaded_Test/Policy.pdf'"));
        assert!(artifacts.script.contains("'downloaded_Test/Policy_2.pdf'"));
        assert!(artifacts.script.contains("'downloaded_Test/Policy_3.pdf'"));
    }

    #[test]
    fn test_unnameable_record_falls_back_to_untitled() {
        let records = vec![record("???", "u1")];
        let artifacts = emit(&records, "Test").unwrap();
        assert!(artifacts.script.contains("'downloaded_Test/untitled.pdf'"));
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let records = vec![record("Report 1", "")];
        let err = emit(&records, "Test").unwrap_err();
        assert!(matches!(err, ExportError::MalformedRecord { name } if name == "Report 1"));
    }

    #[test]
    fn test_shell_quoting_survives_apostrophes() {
        let records = vec![record("Chief's Orders", "u1")];
        let artifacts = emit(&records, "Test").unwrap();
        assert!(artifacts
            .script
            .contains(r"echo 'Downloading: Chief'\''s Orders'"));
    }

    #[test]
    fn test_empty_records_render_header_only() {
        let artifacts = emit(&[], "Test").unwrap();
        assert_eq!(artifacts.csv, "name,url\n");
        assert_eq!(artifacts.script.matches("wget ").count(), 0);
        assert!(artifacts.script.contains("mkdir -p 'downloaded_Test'"));
    }
}
