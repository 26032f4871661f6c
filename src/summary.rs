use crate::analyze::Analysis;
use crate::file::ReadFileMetadata;

use anyhow::{Context, Result};
use std::io::{BufWriter, Write};

/// Writes the summary statistics of an analysed read, along with where it came from, as JSON.
///
/// # Arguments
///
/// * `analysis` - The analysed record.
/// * `input` - A string slice that holds the path to the input file.
/// * `output` - A string slice that holds the path to the JSON file, which is overwritten.
pub fn summarize(analysis: &Analysis, input: &str, output: &str) -> Result<()> {
    info!("Writing summary to {output}");

    let data = ReadFileMetadata {
        nanodq_version: crate::cli::VERSION.to_string(),
        file_path: std::fs::canonicalize(input)
            .with_context(|| format!("Unable to resolve path {input}"))?
            .display()
            .to_string(),
        sequence_id: analysis.record.id.clone(),
        summary: analysis.summary.clone(),
    };

    let file = std::fs::File::create(output)
        .with_context(|| format!("Unable to create summary file {output}"))?;
    let mut wtr = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut wtr, &data).context("Could not serialize summary")?;
    writeln!(wtr)?;
    wtr.flush()?;

    Ok(())
}
