use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 nanodq version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   per-base and average Phred quality of a single consensus Nanopore read";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// the input .fastq file, which must contain exactly one read
    #[arg(short, long)]
    pub input: String,

    /// append the per-base table to this file instead of printing it.
    /// the file only receives the base number and Phred score columns
    #[arg(short, long, verbatim_doc_comment)]
    pub output: Option<String>,

    /// also report the sequence length, average Phred score, and expected and most probable
    /// number of errors. with --output, this is written as an <Info> block for Prism
    #[arg(short, long, visible_alias = "output-prism-project-info", action)]
    pub prism: bool,

    /// write the summary statistics as JSON to this file
    #[arg(short, long)]
    pub json: Option<String>,

    /// log the progress of each step
    #[arg(short, long, action)]
    pub verbose: bool,
}

impl Cli {
    /// The log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
