//! NEO CSV loading
//!
//! Columns are looked up by header name: `pdes`, `name`, `diameter`, `pha`.
//! Other columns are ignored, missing ones read as empty.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::model::{NearEarthObject, NeoRecord};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{LoadError, LoadResult};

/// Read NEOs from a CSV file
pub fn load_neos(path: impl AsRef<Path>) -> LoadResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let neos = read_neos(file, path)?;

    let count = neos.len().to_string();
    let shown = path.display().to_string();
    log_event_with_fields(
        Event::NeosLoaded,
        &[("count", count.as_str()), ("path", shown.as_str())],
    );

    Ok(neos)
}

/// Read NEOs from any CSV source; `origin` labels errors
pub fn read_neos<R: Read>(reader: R, origin: &Path) -> LoadResult<Vec<NearEarthObject>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut neos = Vec::new();

    for (idx, result) in csv_reader.deserialize::<NeoRecord>().enumerate() {
        // +2: 1-based, after the header line
        let row = idx + 2;
        let record = result.map_err(|source| LoadError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;

        let neo = NearEarthObject::from_record(&record).map_err(|source| LoadError::Record {
            path: PathBuf::from(origin),
            row,
            source,
        })?;
        neos.push(neo);
    }

    Ok(neos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,H,diameter,albedo
a0000433,2000433,433 Eros (A898 PA),433,Eros,,Y,N,10.4,16.84,0.25
a0000719,2000719,719 Albert (A911 TB),719,Albert,,Y,N,15.5,,
bK20A00B,3000001,(2020 AB),2020 AB,,,Y,,,,
";

    #[test]
    fn test_read_by_header_name() {
        let neos = read_neos(SAMPLE.as_bytes(), Path::new("neos.csv")).unwrap();

        assert_eq!(neos.len(), 3);
        assert_eq!(neos[0].designation(), "433");
        assert_eq!(neos[0].name(), Some("Eros"));
        assert_eq!(neos[0].diameter(), 16.84);
        assert!(neos[1].diameter().is_nan());
        assert_eq!(neos[2].name(), None);
        assert!(!neos[2].hazardous());
    }

    #[test]
    fn test_missing_columns_read_as_empty() {
        let data = "pdes\n433\n";
        let neos = read_neos(data.as_bytes(), Path::new("neos.csv")).unwrap();
        assert_eq!(neos[0].name(), None);
        assert!(neos[0].diameter().is_nan());
    }

    #[test]
    fn test_missing_designation_reports_row() {
        let data = "pdes,name\n433,Eros\n,Nameless\n";
        let err = read_neos(data.as_bytes(), Path::new("neos.csv")).unwrap_err();

        match err {
            LoadError::Record { row, ref source, .. } => {
                assert_eq!(row, 3);
                assert_eq!(source.code().code(), "NEO_MODEL_MISSING_DESIGNATION");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_neos("/nonexistent/neos.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.path(), &PathBuf::from("/nonexistent/neos.csv"));
    }
}
