use crate::config::GatherOptions;
use crate::error::{GatherError, Result};
use crate::extension::determine_output_extension;
use crate::fs::{FileReader, StdFileReader};
use crate::safety::{check_not_input, resolve};
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Outcome of a gather call.
#[derive(Debug)]
pub struct GatherReport {
    /// Absolute path of the written file.
    pub output_path: PathBuf,
    /// Inputs whose content made it into the output, as given.
    pub gathered: Vec<PathBuf>,
    /// `GatherError::Read` for every input that could not be read.
    pub failures: Vec<GatherError>,
}

/// ISO-8601 UTC with milliseconds, `:` and `.` swapped for `-` so it is safe in file names.
pub fn filesystem_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string().replace([':', '.'], "-")
}

pub fn auto_output_path<P: AsRef<Path>>(inputs: &[P], options: &GatherOptions, at: DateTime<Utc>) -> PathBuf {
    let ext = determine_output_extension(inputs, &options.extension_priority);
    options.output_dir.join(format!("gathered-{}{}", filesystem_timestamp(at), ext))
}

pub struct Gatherer<'a> {
    reader: &'a dyn FileReader,
    base_dir: PathBuf,
}

impl<'a> Gatherer<'a> {
    /// Relative inputs and outputs are resolved against `base_dir`.
    pub fn new(reader: &'a dyn FileReader, base_dir: impl Into<PathBuf>) -> Self {
        Self { reader, base_dir: base_dir.into() }
    }

    pub fn gather(&self, inputs: &[PathBuf], output: Option<&Path>, options: &GatherOptions) -> Result<GatherReport> {
        if inputs.is_empty() {
            return Err(GatherError::EmptyInput);
        }

        let output = match output {
            Some(p) => p.to_path_buf(),
            None => auto_output_path(inputs, options, Utc::now()),
        };
        check_not_input(&self.base_dir, inputs, &output)?;
        let output_path = resolve(&self.base_dir, &output);
        debug!("Gathering {} files into {}", inputs.len(), output_path.display());

        if options.create_output_dir {
            if let Some(parent) = output_path.parent() {
                if !parent.exists() {
                    info!("Creating output directory {}", parent.display());
                    std::fs::create_dir_all(parent)
                        .map_err(|source| GatherError::CreateDir { path: parent.to_path_buf(), source })?;
                }
            }
        }

        let separator = "\n".repeat(options.file_separation);
        let mut buffer = String::new();
        let mut gathered = Vec::new();
        let mut failures = Vec::new();
        for input in inputs {
            match self.reader.read_to_string(&resolve(&self.base_dir, input)) {
                Ok(content) => {
                    debug!("Gathered {}", input.display());
                    let _ = writeln!(buffer, "{} File: {}", options.comment_prefix, input.display());
                    buffer.push_str(&content);
                    buffer.push_str(&separator);
                    gathered.push(input.clone());
                }
                Err(source) => {
                    let err = GatherError::Read { path: input.clone(), source };
                    error!("Error processing file: {}", err);
                    failures.push(err);
                }
            }
        }

        std::fs::write(&output_path, buffer)
            .map_err(|source| GatherError::Write { path: output_path.clone(), source })?;

        Ok(GatherReport { output_path, gathered, failures })
    }
}

/// Gathers with the std reader, resolving paths against the process working directory.
pub fn gather(inputs: &[PathBuf], output: Option<&Path>, options: &GatherOptions) -> anyhow::Result<GatherReport> {
    let cwd = std::env::current_dir()?;
    Ok(Gatherer::new(&StdFileReader, cwd).gather(inputs, output, options)?)
}

#[cfg(test)]
#[path = "gather_tests.rs"]
mod tests;
