//! Batch driver: process a directory of task files, one worker per file.
//!
//! Files are independent, so parallelism stops at the file boundary: each
//! worker parses its own file, builds its own curve, runs its tasks in
//! order, and writes one result file. A broken file only aborts its own
//! output; the remaining workers finish and the first failure (by file
//! name) is reported afterwards.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::{output, parser};

/// Parse, run, and render one task file, writing the result lines to a
/// file of the same name in `output_dir`.
pub fn run_file(input: &Path, output_dir: &Path) -> Result<()> {
    let name = input.file_name().ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("input path has no file name: {}", input.display()),
        ))
    })?;

    let text = fs::read_to_string(input)?;
    let config = parser::parse(&text)?;
    let results = config.run()?;

    let mut rendered = output::format_results(&results).join("\n");
    rendered.push('\n');
    fs::write(output_dir.join(name), rendered)?;
    Ok(())
}

/// Process every `*.txt` file in `input_dir` in parallel.
pub fn run_directory(input_dir: &Path, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    files.sort();

    info!("processing {} task files from {}", files.len(), input_dir.display());

    let failures: Vec<Error> = files
        .par_iter()
        .filter_map(|path| match run_file(path, output_dir) {
            Ok(()) => {
                info!("{}: done", path.display());
                None
            }
            Err(err) => {
                error!("{}: {}", path.display(), err);
                Some(err)
            }
        })
        .collect();

    // par_iter keeps the sorted file order, so this is the first failure
    match failures.into_iter().next() {
        None => Ok(()),
        Some(err) => Err(err),
    }
}
