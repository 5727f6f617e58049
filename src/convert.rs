// src/convert.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::document::{build_group, EventGroup};
use crate::parse;

/// Convert every `.csv` table under `input_dir` into one JSON document of
/// event groups at `output_path`, returning the number of groups written.
///
/// Tables are processed in file-name order so output is reproducible across
/// platforms. All groups are built before the output file is touched: any
/// failure aborts the run with no partial document on disk.
#[instrument(level = "info", skip(input_dir, output_path), fields(input = %input_dir.display(), output = %output_path.display()))]
pub fn convert_dir(input_dir: &Path, output_path: &Path) -> Result<usize> {
    let mut table_paths: Vec<_> = fs::read_dir(input_dir)
        .with_context(|| format!("Failed to list input directory {:?}", input_dir))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("csv"))
        .collect();
    // read_dir order is platform-dependent
    table_paths.sort();

    let mut groups: Vec<EventGroup> = Vec::with_capacity(table_paths.len());
    for path in &table_paths {
        let group_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("Bad table file name {:?}", path))?;
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read table {:?}", path))?;

        let text = parse::normalize_newlines(&raw);
        let mut records = parse::parse_table(&text, parse::DEFAULT_SEPARATOR);
        let keyed = if records.is_empty() {
            Vec::new()
        } else {
            let header = records.remove(0);
            parse::key_rows(&records, &header)
        };

        let group = build_group(group_name, keyed)
            .with_context(|| format!("Failed to build event group from {:?}", path))?;
        info!(table = group_name, "built event group");
        groups.push(group);
    }

    let file = fs::File::create(output_path)
        .with_context(|| format!("Failed to create output file {:?}", output_path))?;
    serde_json::to_writer_pretty(file, &groups)
        .with_context(|| format!("Failed to write document to {:?}", output_path))?;
    info!(groups = groups.len(), "wrote document");

    Ok(groups.len())
}
