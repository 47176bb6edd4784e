use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

/// A relationship-type export document.
///
/// The JSON shape is an object with an optional `graph` label and a
/// `relationship_types` array of name strings:
///
/// ```json
/// { "graph": "acme-crm", "relationship_types": ["KNOWS", "WORKS_AT"] }
/// ```
///
/// Duplicate names are preserved here; deduplication is the job of
/// [`RelTypeSet`](crate::sets::RelTypeSet).
#[derive(Debug, Deserialize)]
pub struct TypeExport {
    /// Label of the graph the export came from, if the exporter recorded one.
    #[serde(default)]
    pub graph: Option<String>,
    /// The exported relationship type names, in file order.
    pub relationship_types: Vec<String>,
}

impl TypeExport {
    /// Loads an export document from a JSON file.
    ///
    /// # Returns
    /// The parsed document, or a message naming the offending path on I/O
    /// and parse failures
    pub fn load_from_json(path: impl AsRef<Path>) -> Result<TypeExport, String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
        let export: TypeExport =
            serde_json::from_slice(&bytes).map_err(|e| format!("{}: {e}", path.display()))?;

        debug!(
            path = %path.display(),
            count = export.relationship_types.len(),
            "loaded type export"
        );
        Ok(export)
    }
}

/// Loads relationship type names from a plain text file, one name per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
pub fn load_names_from_lines(path: impl AsRef<Path>) -> Result<Vec<String>, String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;

    let names: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    debug!(path = %path.display(), count = names.len(), "loaded type names");
    Ok(names)
}
