//! release-radar - upcoming GA release report for operators
//!
//! Maps operators to product suites through a tab-separated mapping table,
//! finds their releases in a release-schedule CSV export, optionally narrows
//! them to target versions, and reports the closest upcoming GA releases per
//! product.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`release_matching`): records, mappings, matching and aggregation
//! - **Application Layer** (`application`): use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use release_radar::prelude::*;
//! use chrono::NaiveDate;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = SearchReleasesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
//! let request = SearchRequest::new(
//!     ExportSource::Discover(PathBuf::from(".")),
//!     PathBuf::from("source.txt"),
//!     today,
//! )
//! .with_reference(Some(PathBuf::from("reference.txt")));
//! let response = use_case.execute(request)?;
//!
//! let model = ReportReadModelBuilder::build(&response, "2026-10-15 09:00:00");
//! println!("{}", TextFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod release_matching;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
    pub use crate::application::dto::{ExportSource, OutputFormat, SearchRequest, SearchResponse};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::SearchReleasesUseCase;
    pub use crate::ports::outbound::{
        ConstraintReader, ExportReader, MappingReader, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::release_matching::domain::{
        MappingTable, MatchResult, MatchStrategy, OperatorMapping, ProductGroup, ReleaseRecord,
        ReleaseReport, SearchSummary, VersionConstraint,
    };
    pub use crate::release_matching::policies::ProductLexicon;
    pub use crate::release_matching::services::{
        Aggregator, ConstraintParser, MappingParser, Matcher, RecordStore, VersionFilter,
    };
    pub use crate::shared::Result;
}
