//! CSV and JSON writers for close approach streams
//!
//! Both consume any iterator of linked approaches and pull it lazily.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{SerializeSeq, Serializer};

use crate::index::ApproachRef;
use crate::model::CSV_HEADER;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ExportError, ExportResult};

/// Output format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// `.csv` / `.json`, case-insensitive
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(OutputFormat::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write approaches as CSV, NEO fields flattened into columns.
///
/// Returns the number of rows written (header excluded).
pub fn write_to_csv<'a, I, W>(results: I, writer: W) -> ExportResult<usize>
where
    I: IntoIterator<Item = ApproachRef<'a>>,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for approach in results {
        csv_writer.write_record(approach.to_view().csv_row())?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Write approaches as a JSON array with the NEO nested under `neo`.
///
/// Pretty-printed with four-space indentation. Returns the number of
/// elements written.
pub fn write_to_json<'a, I, W>(results: I, writer: W) -> ExportResult<usize>
where
    I: IntoIterator<Item = ApproachRef<'a>>,
    W: Write,
{
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);

    let mut seq = serializer.serialize_seq(None)?;
    let mut rows = 0;
    for approach in results {
        seq.serialize_element(&approach.to_view())?;
        rows += 1;
    }
    seq.end()?;

    let mut writer = serializer.into_inner();
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(rows)
}

/// Write approaches to `path`, format chosen by extension.
pub fn write_results<'a, I>(results: I, path: impl AsRef<Path>) -> ExportResult<usize>
where
    I: IntoIterator<Item = ApproachRef<'a>>,
{
    let path = path.as_ref();
    let format =
        OutputFormat::from_path(path).ok_or_else(|| ExportError::UnsupportedFormat(path.to_path_buf()))?;

    let io_error = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = BufWriter::new(File::create(path).map_err(io_error)?);

    let rows = match format {
        OutputFormat::Csv => write_to_csv(results, file)?,
        OutputFormat::Json => write_to_json(results, file)?,
    };

    let shown = path.display().to_string();
    let row_count = rows.to_string();
    log_event_with_fields(
        Event::ExportComplete,
        &[
            ("format", format.as_str()),
            ("path", shown.as_str()),
            ("rows", row_count.as_str()),
        ],
    );

    Ok(rows)
}
