mod app;
mod edge_loader;
mod graph;
mod path;
mod stats;

use clap::Parser;

use app::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = app::run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
