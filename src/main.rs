extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;

mod analyze;
mod cli;
mod file;
mod io;
mod phred;
mod record;
mod report;
mod stats;
mod summary;

use cli::Cli;

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .format_target(false)
    .init();

    debug!("nanodq v{}", cli::VERSION);

    analyze::run(&cli)?;

    debug!("nanodq complete");
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
