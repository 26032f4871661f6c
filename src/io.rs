use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{stdout, BufWriter, Read, Write};
use std::path::Path;

/// Reads the whole input file into memory. The file is closed before this function returns,
/// whether or not reading succeeded.
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be opened.
/// * The file is not valid UTF-8.
pub fn read_input(path: &str) -> Result<String> {
    let mut file =
        File::open(Path::new(path)).with_context(|| format!("Unable to open file {path}"))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Unable to read file {path}"))?;

    Ok(content)
}

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// If `output` is `Some`, the file at that path is opened for appending (and created if it does
/// not exist), so repeated runs accumulate into one file. If `output` is `None`, the standard
/// output is used.
pub fn get_writer(output: &Option<String>) -> Result<BufWriter<Box<dyn Write>>> {
    let writer = BufWriter::new(match output {
        Some(x) => {
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(Path::new(x))
                .with_context(|| format!("Unable to open output file {x}"))?;
            Box::new(file) as Box<dyn Write>
        }
        None => Box::new(stdout()) as Box<dyn Write>,
    });
    Ok(writer)
}
