use crate::cli::Cli;
use crate::record::{FormatError, Record};
use crate::report::{self, Layout};
use crate::stats::{StatsError, Summary};
use crate::{io, summary};

use anyhow::Result;
use std::io::{stdout, Write};
use thiserror::Error;

/// A validated record together with its aggregate quality statistics.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub record: Record,
    pub summary: Summary,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Validates the contents of a single-record FASTQ file and computes its quality statistics.
///
/// # Errors
///
/// Returns `AnalysisError::Format` if `content` is not exactly one well-formed record. Nothing
/// is computed in that case.
pub fn analyze(content: &str) -> Result<Analysis, AnalysisError> {
    let record = Record::parse(content)?;
    let summary = Summary::from_record(&record)?;

    Ok(Analysis { record, summary })
}

/// Analyses the input file given on the command line and writes the requested outputs.
///
/// The input is validated in full, and the JSON summary written, before the table output is
/// opened, so a failed run never leaves a partial table behind.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if successful, or an error if the input cannot be read, is
///   not a single well-formed record, or an output cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    debug!("Processing {}", cli.input);
    match &cli.output {
        Some(output) => debug!("Will output results to {output}"),
        None => debug!("No output filename provided, will list output in terminal"),
    }
    if cli.prism {
        debug!("Will output Prism project information");
    }

    let content = io::read_input(&cli.input)?;
    let analysis = analyze(&content)?;

    debug!("Processing DNA sequence ID: {}", analysis.record.id);
    debug!("DNA sequence length: {} base pairs", analysis.record.len());
    debug!("Separator line: {}", analysis.record.separator);

    // the summary goes first, so a failure here leaves the table output untouched
    if let Some(json) = &cli.json {
        summary::summarize(&analysis, &cli.input, json)?;
    }

    let mut writer = io::get_writer(&cli.output)?;

    let layout = match cli.output {
        Some(_) => Layout::File,
        None => Layout::Terminal,
    };

    if cli.prism {
        match layout {
            Layout::File => {
                report::write_info_block(&mut writer, &analysis.summary)?;
                report::write_summary_lines(&mut stdout().lock(), &analysis.summary)?;
            }
            Layout::Terminal => report::write_summary_lines(&mut writer, &analysis.summary)?,
        }
    }

    report::write_bases(&mut writer, &analysis.record, layout)?;
    writer.flush()?;

    Ok(())
}
