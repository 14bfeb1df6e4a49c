//! Close approach JSON loading
//!
//! The file is a single object:
//!
//! ```text
//! {"fields": ["des", "orbit_id", "jd", "cd", "dist", ...],
//!  "data":   [["433", "659", "2415020.5", "1900-Jan-01 00:00", "0.31", ...], ...]}
//! ```
//!
//! Columns `des`, `cd`, `dist`, `v_rel` are located by name. `null` reads as empty.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::model::{ApproachRecord, CloseApproach};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{LoadError, LoadResult};

#[derive(Debug, Deserialize)]
struct CadFile {
    fields: Vec<String>,
    data: Vec<Vec<Option<String>>>,
}

/// Column positions of the fields the model consumes
struct Columns {
    des: Option<usize>,
    cd: Option<usize>,
    dist: Option<usize>,
    v_rel: Option<usize>,
}

impl Columns {
    fn locate(fields: &[String]) -> Self {
        let find = |name: &str| fields.iter().position(|f| f == name);
        Self {
            des: find("des"),
            cd: find("cd"),
            dist: find("dist"),
            v_rel: find("v_rel"),
        }
    }

    fn record(&self, row: &[Option<String>]) -> ApproachRecord {
        let cell = |column: Option<usize>| {
            column
                .and_then(|i| row.get(i))
                .and_then(|v| v.clone())
                .unwrap_or_default()
        };

        ApproachRecord {
            des: cell(self.des),
            cd: cell(self.cd),
            dist: cell(self.dist),
            v_rel: cell(self.v_rel),
        }
    }
}

/// Read close approaches from a JSON file
pub fn load_approaches(path: impl AsRef<Path>) -> LoadResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let approaches = read_approaches(BufReader::new(file), path)?;

    let count = approaches.len().to_string();
    let shown = path.display().to_string();
    log_event_with_fields(
        Event::ApproachesLoaded,
        &[("count", count.as_str()), ("path", shown.as_str())],
    );

    Ok(approaches)
}

/// Read close approaches from any JSON source; `origin` labels errors
pub fn read_approaches<R: Read>(reader: R, origin: &Path) -> LoadResult<Vec<CloseApproach>> {
    let cad: CadFile = serde_json::from_reader(reader).map_err(|source| LoadError::Json {
        path: origin.to_path_buf(),
        source,
    })?;

    let columns = Columns::locate(&cad.fields);
    if columns.des.is_none() {
        return Err(LoadError::Malformed {
            path: origin.to_path_buf(),
            reason: "no 'des' field".to_string(),
        });
    }

    let mut approaches = Vec::with_capacity(cad.data.len());
    for (idx, row) in cad.data.iter().enumerate() {
        if row.len() != cad.fields.len() {
            return Err(LoadError::Malformed {
                path: origin.to_path_buf(),
                reason: format!(
                    "row {} has {} values, expected {}",
                    idx + 1,
                    row.len(),
                    cad.fields.len()
                ),
            });
        }

        let approach = CloseApproach::from_record(&columns.record(row)).map_err(|source| {
            LoadError::Record {
                path: origin.to_path_buf(),
                row: idx + 1,
                source,
            }
        })?;
        approaches.push(approach);
    }

    Ok(approaches)
}
