use crate::cli::Args;
use crate::error::{GatherError, Result};
use crate::fs::{FileReader, WalkerFactory};
use crate::gather::{GatherReport, Gatherer};
use crate::patterns::expand_patterns;
use crate::safety::check_not_protected;
use log::{debug, warn};
use std::path::Path;

pub struct Deps<'a> {
    pub walker: &'a dyn WalkerFactory,
    pub reader: &'a dyn FileReader,
}

/// Runs one CLI invocation against `cwd`: guard, expand, gather.
pub fn run_app(deps: Deps, args: &Args, cwd: &Path) -> Result<GatherReport> {
    let patterns = args.effective_patterns();
    if patterns.is_empty() {
        return Err(GatherError::NoPatterns);
    }
    let options = args.gather_options();
    match &args.output {
        Some(output) => check_not_protected(cwd, output)?,
        None => check_not_protected(cwd, &options.output_dir)?,
    }

    let files = expand_patterns(deps.walker, cwd, &patterns)?;
    if files.is_empty() {
        return Err(GatherError::NoMatches { patterns });
    }
    debug!("Resolved {} files from {} patterns", files.len(), patterns.len());

    let report = Gatherer::new(deps.reader, cwd).gather(&files, args.output.as_deref(), &options)?;
    if !report.failures.is_empty() {
        warn!("{} of {} files could not be read", report.failures.len(), files.len());
    }
    Ok(report)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
