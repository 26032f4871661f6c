use crate::record::Record;
use crate::stats::Summary;

use csv::{QuoteStyle, WriterBuilder};
use indoc::writedoc;
use std::io::Write;

/// Which columns of the per-base table are written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `position, base, quality character, score`, used when printing to the terminal
    Terminal,
    /// `position, score`, used when writing to an output file
    File,
}

/// Writes one tab-separated row per base of `rec` to `writer`.
///
/// Fields are never quoted, so quality characters such as `"` are written as they appear in the
/// input file.
pub fn write_bases(writer: &mut impl Write, rec: &Record, layout: Layout) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    for base in rec.bases() {
        match layout {
            Layout::Terminal => wtr.serialize((base.position, base.base, base.qual, base.score))?,
            Layout::File => wtr.serialize((base.position, base.score))?,
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the `<Info>` block for an output file, followed by the header of the per-base table.
/// The block is laid out to be pasted directly into a Prism project.
pub fn write_info_block(writer: &mut impl Write, summary: &Summary) -> std::io::Result<()> {
    writedoc!(
        writer,
        "
        <Info>
        DNA Sequence Length\t{}
        Average Phred Quality Score\t{:.9}
        Expected Number Of Nanopore Sequencing Base Errors\t{:.9}
        Most Probable Number Of Nanopore Sequencing Base Errors\t{}
        </Info>
        DNA Read Length (bp)\tBase Phred Quality Score
        ",
        summary.sequence_length,
        summary.average_phred_score,
        summary.expected_errors,
        summary.most_probable_errors,
    )
}

/// Writes the three-line summary shown on the terminal.
pub fn write_summary_lines(writer: &mut impl Write, summary: &Summary) -> std::io::Result<()> {
    writeln!(writer, "{summary}")
}
