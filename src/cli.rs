use crate::config::GatherOptions;
use crate::patterns::EVERYTHING;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gather", version)]
#[command(about = "Concatenate files matching glob patterns into one document, each preceded by a header comment naming its path. Output is auto-named into generated/ unless --output is given.")]
pub struct Args {
    /// Glob patterns (`*`, `**`, `{a,b}`); dotfiles match too
    pub patterns: Vec<String>,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Gather every file under the working directory, ignoring PATTERN arguments
    #[arg(long)]
    pub everything: bool,

    /// Directory for auto-named output
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Comment marker written before each file header
    #[arg(short, long, value_name = "PREFIX", allow_hyphen_values = true)]
    pub comment_prefix: Option<String>,

    /// Newlines written after each file
    #[arg(short, long, value_name = "N")]
    pub separation: Option<usize>,

    /// Fail instead of creating a missing output directory
    #[arg(long)]
    pub no_create_dir: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn effective_patterns(&self) -> Vec<String> {
        if self.everything { vec![EVERYTHING.to_string()] } else { self.patterns.clone() }
    }

    /// Defaults with only the given flags applied on top.
    pub fn gather_options(&self) -> GatherOptions {
        let mut opts = GatherOptions::default();
        if let Some(dir) = &self.output_dir { opts.output_dir = dir.clone(); }
        if let Some(prefix) = &self.comment_prefix { opts.comment_prefix = prefix.clone(); }
        if let Some(n) = self.separation { opts.file_separation = n; }
        if self.no_create_dir { opts.create_output_dir = false; }
        opts
    }
}
