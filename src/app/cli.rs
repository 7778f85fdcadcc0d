use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Enumerates simple paths and classifies node roles in a directed edge-list CSV.", long_about = None)]
pub struct Cli {
    /// CSV edge list (Source/Target columns) to analyze
    pub edges_file: PathBuf,

    /// Suppress verbose log output; the report and a final 'Done.' are still printed.
    #[clap(short, long)]
    pub quiet: bool,
}
