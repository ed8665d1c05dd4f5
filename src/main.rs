use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Builder;
use gather::fs::{StdFileReader, StdWalkerFactory};
use gather::{run_app, Args, Deps, GatherError};
use log::LevelFilter;

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    Builder::new().filter(None, level).format_timestamp(None).init();
}

fn run(args: &Args) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let deps = Deps { walker: &StdWalkerFactory, reader: &StdFileReader };
    let report = run_app(deps, args, &cwd)?;
    let total = report.gathered.len() + report.failures.len();
    println!("Successfully gathered {} files to {}", total, report.output_path.display());
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        match e.downcast_ref::<GatherError>() {
            Some(err) => eprintln!("Error: {}", err),
            None => eprintln!("Fatal error: {:#}", e),
        }
        std::process::exit(1);
    }
}
