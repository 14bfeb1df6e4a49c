//! Observability events for neodb
//!
//! Every lifecycle point that produces a log line has a typed event here.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Loading
    /// NEO file read
    NeosLoaded,
    /// Close approach file read
    ApproachesLoaded,

    // Linking
    /// Dataset linked and indexed
    LinkComplete,
    /// Dataset could not be built (FATAL)
    DatasetRejected,

    // Query
    /// Query stream fully consumed
    QueryComplete,

    // Export
    /// Results written to a file
    ExportComplete,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::NeosLoaded => "NEOS_LOADED",
            Event::ApproachesLoaded => "APPROACHES_LOADED",
            Event::LinkComplete => "LINK_COMPLETE",
            Event::DatasetRejected => "DATASET_REJECTED",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::ExportComplete => "EXPORT_COMPLETE",
        }
    }

    /// Whether this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
