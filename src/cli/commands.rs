//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Load both source files
//! 3. Link and index once
//! 4. Run the command against the read-only dataset

use std::io::{self, Write};
use std::path::Path;

use crate::executor::limit;
use crate::export::write_results;
use crate::filters::create_filters;
use crate::index::NeoDatabase;
use crate::loader::{load_approaches, load_neos};
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope, Timer};

use super::args::{Cli, Command, InspectArgs, QueryArgs};
use super::config::Config;
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    let db = load_database(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Inspect(args) => {
            inspect(&db, &args, &mut out)?;
        }
        Command::Query(args) => {
            query(&db, &args, config.default_limit, &mut out)?;
        }
    }

    Ok(())
}

/// Load the config file (or defaults) and apply command-line overrides.
///
/// Also sets the process-wide log level.
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(neofile) = &cli.neofile {
        config.neo_path = neofile.clone();
    }
    if let Some(cadfile) = &cli.cadfile {
        config.cad_path = cadfile.clone();
    }

    Logger::set_min_severity(config.severity());
    Ok(config)
}

/// Load both files and build the linked dataset
pub fn load_database(config: &Config) -> CliResult<NeoDatabase> {
    load_database_from(&config.neo_path, &config.cad_path)
}

/// Load both files from explicit paths and build the linked dataset
pub fn load_database_from(neo_path: &Path, cad_path: &Path) -> CliResult<NeoDatabase> {
    let scope = ObservationScope::new("DATASET_LOAD");

    let neos = match load_neos(neo_path) {
        Ok(neos) => neos,
        Err(e) => {
            scope.fail(&e.to_string());
            return Err(e.into());
        }
    };
    let approaches = match load_approaches(cad_path) {
        Ok(approaches) => approaches,
        Err(e) => {
            scope.fail(&e.to_string());
            return Err(e.into());
        }
    };

    match NeoDatabase::new(neos, approaches) {
        Ok(db) => {
            scope.complete();
            Ok(db)
        }
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(Event::DatasetRejected, &[("reason", reason.as_str())]);
            scope.fail(&reason);
            Err(e.into())
        }
    }
}

/// Print one NEO, and with `--verbose` its close approaches.
///
/// Returns whether a matching NEO was found.
pub fn inspect<W: Write>(db: &NeoDatabase, args: &InspectArgs, out: &mut W) -> CliResult<bool> {
    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.lookup_by_designation(pdes),
        (None, Some(name)) => db.lookup_by_name(name),
        (None, None) => None,
    };

    let Some(neo) = neo else {
        writeln!(out, "No matching NEOs exist in the database.")?;
        return Ok(false);
    };

    writeln!(out, "{}", neo)?;
    if args.verbose {
        for approach in neo.approaches() {
            writeln!(out, "- {}", approach)?;
        }
    }

    Ok(true)
}

/// Run a filtered query and print or export the results.
///
/// `default_limit` applies when `--limit` is absent. Returns the number of
/// results produced.
pub fn query<W: Write>(
    db: &NeoDatabase,
    args: &QueryArgs,
    default_limit: Option<usize>,
    out: &mut W,
) -> CliResult<usize> {
    let timer = Timer::new();
    let filters = create_filters(&args.to_options());
    let results = limit(db.query(&filters), args.limit.or(default_limit));

    let count = match &args.outfile {
        Some(path) => write_results(results, path)?,
        None => {
            let mut count = 0;
            for approach in results {
                writeln!(out, "{}", approach)?;
                count += 1;
            }
            count
        }
    };

    let filter_count = filters.len().to_string();
    let result_count = count.to_string();
    let elapsed = timer.elapsed_ms();
    log_event_with_fields(
        Event::QueryComplete,
        &[
            ("elapsed_ms", elapsed.as_str()),
            ("filters", filter_count.as_str()),
            ("results", result_count.as_str()),
        ],
    );

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApproachRecord, CloseApproach, NearEarthObject, NeoRecord};
    use std::path::PathBuf;

    fn dataset() -> NeoDatabase {
        let neos = vec![
            NearEarthObject::from_record(&NeoRecord::new("433", "Eros", "16.84", "N")).unwrap(),
            NearEarthObject::from_record(&NeoRecord::new("99942", "Apophis", "0.37", "Y")).unwrap(),
        ];
        let approaches = vec![
            CloseApproach::from_record(&ApproachRecord::new("433", "2025-Jan-01 00:00", "0.15", "5.1"))
                .unwrap(),
            CloseApproach::from_record(&ApproachRecord::new("99942", "2029-Apr-13 21:46", "0.00025", "7.42"))
                .unwrap(),
            CloseApproach::from_record(&ApproachRecord::new("433", "2030-Jan-01 00:00", "0.3", "6"))
                .unwrap(),
        ];
        NeoDatabase::new(neos, approaches).unwrap()
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_inspect_by_name_verbose() {
        let db = dataset();
        let args = InspectArgs {
            name: Some("Eros".into()),
            verbose: true,
            ..Default::default()
        };

        let mut buffer = Vec::new();
        assert!(inspect(&db, &args, &mut buffer).unwrap());

        let text = output(buffer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NEO 433 (Eros)"));
        assert!(lines[1].starts_with("- On 2025-01-01 00:00"));
    }

    #[test]
    fn test_inspect_missing() {
        let db = dataset();
        let args = InspectArgs {
            pdes: Some("1".into()),
            ..Default::default()
        };

        let mut buffer = Vec::new();
        assert!(!inspect(&db, &args, &mut buffer).unwrap());
        assert_eq!(output(buffer), "No matching NEOs exist in the database.\n");
    }

    #[test]
    fn test_query_to_stdout() {
        let db = dataset();
        let args = QueryArgs {
            max_distance: Some(0.2),
            ..Default::default()
        };

        let mut buffer = Vec::new();
        assert_eq!(query(&db, &args, None, &mut buffer).unwrap(), 2);
        assert_eq!(output(buffer).lines().count(), 2);
    }

    #[test]
    fn test_query_default_limit() {
        let db = dataset();
        let mut buffer = Vec::new();
        assert_eq!(query(&db, &QueryArgs::default(), Some(1), &mut buffer).unwrap(), 1);

        let args = QueryArgs {
            limit: Some(0),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        assert_eq!(query(&db, &args, Some(1), &mut buffer).unwrap(), 3);
    }

    #[test]
    fn test_query_to_file() {
        let db = dataset();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hazardous.json");
        let args = QueryArgs {
            hazardous: true,
            outfile: Some(path.clone()),
            ..Default::default()
        };

        let mut buffer = Vec::new();
        assert_eq!(query(&db, &args, None, &mut buffer).unwrap(), 1);
        assert!(buffer.is_empty());

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written[0]["neo"]["name"], "Apophis");
    }

    #[test]
    fn test_resolve_config_overrides() {
        let cli = Cli {
            config: None,
            neofile: Some(PathBuf::from("x.csv")),
            cadfile: None,
            command: Command::Query(QueryArgs::default()),
        };
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.neo_path, PathBuf::from("x.csv"));
        assert_eq!(config.cad_path, PathBuf::from("data/cad.json"));
    }

    #[test]
    fn test_load_missing_files() {
        let err = load_database_from(Path::new("/nonexistent/neos.csv"), Path::new("/nonexistent/cad.json"))
            .unwrap_err();
        assert_eq!(err.code_str(), "NEO_CLI_LOAD_FAILED");
    }
}
