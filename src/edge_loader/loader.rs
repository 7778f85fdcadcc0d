use crate::graph::EdgeRecord;

use super::error::EdgeLoaderError;

//─────────────────────────────────────────────────────────────────────────────

/// Column header literals the edge table must carry.
const REQUIRED_COLUMNS: [&str; 2] = ["Source", "Target"];

/// Loads the directed edge list from a CSV file.
///
/// The file must carry `Source` and `Target` header columns; any additional
/// columns are ignored.  Row order is preserved, since graph construction
/// and path enumeration depend on edge input order.
pub fn load_edges_from_file(file_path: &str) -> Result<Vec<EdgeRecord>, EdgeLoaderError> {
    let mut reader = csv::Reader::from_path(file_path)
        .map_err(|e| EdgeLoaderError::ReadCsv(file_path.into(), e))?;

    // Check both required columns up front for a precise error, rather than
    // surfacing a per-row missing-field failure later.
    let headers = reader
        .headers()
        .map_err(|e| EdgeLoaderError::ReadCsv(file_path.into(), e))?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(EdgeLoaderError::MissingColumn(
                file_path.into(),
                column.into(),
            ));
        }
    }

    let edges: Vec<EdgeRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .map_err(|e| EdgeLoaderError::ParseRecord(file_path.into(), e))?;

    if edges.is_empty() {
        return Err(EdgeLoaderError::NoEdgesFound(file_path.into()));
    }
    Ok(edges)
}
