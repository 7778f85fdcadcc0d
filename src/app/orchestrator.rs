//! Main application orchestrator.
//!
//! Coordinates the entire analysis:
//! 1. Initializes logging.
//! 2. Validates the input edge file and derives the dataset name.
//! 3. Loads the directed edge list.
//! 4. Initializes a writer for graph adjacency details.
//! 5. Builds the adjacency graph, enumerates simple paths, and classifies
//!    node roles, delegating each stage to the `processing` module.
//! 6. Prints the path and node-role reports to standard output in fixed order.
//! 7. Provides summary messages to the user.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::path::PathScraper;
use crate::stats;
use std::io::Write; // For flushing stdout and the graph log writer.
use std::path::Path;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Arguments
/// * `cli` - The `Cli` struct containing parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if any unrecoverable error occurs, such as a missing
/// input file, a malformed edge table, or a failure to write the report.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let edges_file_path = &cli.edges_file;
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode.
    // This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("analyzer.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (analyzer.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            // This message goes to the newly initialized log file.
            verbose_println!(quiet_mode, "Verbose logging initialized to analyzer.log");
            // Initial flush after initialization message.
            if let Err(e) = logger::flush_global_logger() {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to flush analyzer.log after initialization: {}",
                    e
                );
            }
        }
    }

    // Validate the edge file and get the dataset name. This is an early check.
    let dataset_name =
        file_handler::validate_edges_file_and_get_dataset(edges_file_path, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(
        quiet_mode,
        "Analyzing Edge List: {} (dataset '{}')",
        edges_file_path.display(),
        dataset_name
    );
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    // Load the ordered edge list from the CSV file.
    let edges = processing::load_edges_from_file(edges_file_path, quiet_mode)?;

    // Initialize the graph details log writer. The `BufWriter` flushes
    // explicitly below once the graph has been dumped.
    let graph_log_file_path = Path::new("graph_details.log");
    let mut graph_log_writer =
        file_handler::init_graph_log_writer(graph_log_file_path).map_err(|e| {
            verbose_eprintln!(
                quiet_mode,
                "[ERROR] Failed to open graph details log (graph_details.log): {}. Graph details will not be logged.",
                e
            );
            AppError::Io(e)
        })?;

    // Run the sequential analysis pipeline.
    let graph = processing::build_graph(&edges, quiet_mode, &mut graph_log_writer);
    let paths = processing::enumerate_paths(&graph, quiet_mode);
    let classification = processing::classify_nodes(&graph, quiet_mode);

    // Explicitly flush the graph log writer once the graph has been dumped.
    if let Err(e) = graph_log_writer.flush() {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Failed to flush graph details log (graph_details.log): {}. Some graph data might be lost.",
            e
        );
    }

    // Print the analysis report to standard output in fixed order:
    // enumerated paths and their total first, then the three role reports.
    verbose_println!(quiet_mode, "[STEP 5] Printing analysis report...");
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    PathScraper::print_paths_to_writer(&paths, &mut stdout_lock)?;
    stats::print_classification_to_writer(&classification, &mut stdout_lock)?;
    stdout_lock.flush()?;

    // Final flush of analyzer.log before exiting successfully.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of analyzer.log: {}",
                e
            );
        }
    }

    if quiet_mode {
        println!("\nDone.");
    } else {
        println!(
            "\nAnalysis finished. See 'analyzer.log' for verbose output and 'graph_details.log' for the adjacency listing."
        );
    }

    Ok(())
}
