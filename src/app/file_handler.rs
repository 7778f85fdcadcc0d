//! Provides utility functions for file system operations critical to the application.
//!
//! This includes validating the edge list path, deriving a dataset name,
//! and initializing the graph details log writer. It uses macros from the
//! parent `app` module for verbose logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::{Path, PathBuf};
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln; // These macros write to the log file if the logger is initialized.

/// Validates the given edge list path and derives a dataset name from it.
///
/// Checks if the path exists and points to a file. The dataset name is
/// derived from the file stem.
///
/// # Arguments
/// * `edges_file_path` - A `PathBuf` to the CSV edge file.
/// * `quiet_mode` - A boolean indicating whether to suppress verbose logging.
///
/// # Errors
/// Returns `AppError::General` if the path is invalid (not found or not a file).
pub fn validate_edges_file_and_get_dataset(
    edges_file_path: &PathBuf,
    quiet_mode: bool,
) -> Result<String, AppError> {
    if !edges_file_path.exists() {
        let error_msg = format!("File not found: {}", edges_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !edges_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", edges_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    let dataset_name = edges_file_path
        .file_stem()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_string()) // Allocate String if valid stem.
        .ok_or_else(|| {
            // Unlikely if `is_file` passed, but handled robustly.
            let error_msg = format!(
                "Could not determine dataset name from file: {}",
                edges_file_path.display()
            );
            verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
            AppError::General(error_msg)
        })?;

    Ok(dataset_name)
}

/// Initializes and returns a `BufWriter<File>` for the graph details log file.
///
/// The file is created if it doesn't exist and truncated if it does, so the
/// graph log only contains details from the current run.
///
/// # Arguments
/// * `file_path` - The `Path` to the graph log file (e.g., "graph_details.log").
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened or created.
pub fn init_graph_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Overwrite graph log each run.
        .open(file_path)?;
    Ok(BufWriter::new(file)) // Default buffer capacity.
}
