use crate::release_matching::domain::ReleaseRecord;
use crate::shared::error::RadarError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::Path;

/// Date-only layouts accepted in the GA date column
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Date-time layouts whose date part is used
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Canonical export columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    ProductSuite,
    ReleaseName,
    BusinessUnit,
    GaDate,
    GaName,
    Maintainer,
    Link,
}

impl Column {
    const REQUIRED: [Column; 6] = [
        Column::ProductSuite,
        Column::ReleaseName,
        Column::BusinessUnit,
        Column::GaDate,
        Column::GaName,
        Column::Link,
    ];

    /// Maps a normalized header name to its canonical column
    fn from_header(normalized: &str) -> Option<Self> {
        match normalized {
            "product" | "product suite" | "product name" => Some(Column::ProductSuite),
            "release" | "release name" => Some(Column::ReleaseName),
            "bu" | "business unit" => Some(Column::BusinessUnit),
            "ga date" | "ga" => Some(Column::GaDate),
            "ga name" => Some(Column::GaName),
            "maintainer" | "maintainers" => Some(Column::Maintainer),
            "link" | "url" => Some(Column::Link),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Column::ProductSuite => "Product",
            Column::ReleaseName => "Release",
            Column::BusinessUnit => "BU",
            Column::GaDate => "GA date",
            Column::GaName => "GA name",
            Column::Maintainer => "Maintainers",
            Column::Link => "Link",
        }
    }
}

/// Positions of the canonical columns in the export header
#[derive(Debug, Default)]
struct ColumnLayout {
    positions: [Option<usize>; 7],
}

impl ColumnLayout {
    fn from_headers<'h>(headers: impl Iterator<Item = &'h str>) -> Self {
        let mut layout = ColumnLayout::default();
        for (index, header) in headers.enumerate() {
            if let Some(column) = Column::from_header(&normalize_header(header)) {
                // First occurrence wins
                layout.positions[column as usize].get_or_insert(index);
            }
        }
        layout
    }

    fn position(&self, column: Column) -> Option<usize> {
        self.positions[column as usize]
    }

    fn missing_required(&self) -> Vec<String> {
        Column::REQUIRED
            .iter()
            .filter(|column| self.position(**column).is_none())
            .map(|column| column.label().to_string())
            .collect()
    }
}

/// RecordStore - the release export normalized into [`ReleaseRecord`]s
///
/// Column names are matched case- and whitespace-insensitively. A GA date
/// that cannot be parsed becomes `None` and is counted, it never fails the load.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ReleaseRecord>,
    unparsed_dates: usize,
}

impl RecordStore {
    pub fn new(records: Vec<ReleaseRecord>) -> Self {
        Self {
            records,
            unparsed_dates: 0,
        }
    }

    /// Parses CSV content read from `source`.
    ///
    /// # Errors
    /// - [`RadarError::MissingColumns`] when a required column is absent
    /// - [`RadarError::DataSource`] when the content is not readable CSV
    pub fn from_csv(content: &str, source: &Path) -> Result<Self, RadarError> {
        let data_source_error = |details: String| RadarError::DataSource {
            path: source.to_path_buf(),
            details,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| data_source_error(format!("CSV header could not be read: {}", e)))?;
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(data_source_error("CSV export is empty".to_string()));
        }

        let layout = ColumnLayout::from_headers(headers.iter());
        let missing = layout.missing_required();
        if !missing.is_empty() {
            return Err(RadarError::MissingColumns {
                path: source.to_path_buf(),
                columns: missing,
            });
        }

        let mut store = RecordStore::default();
        for (row_idx, result) in reader.records().enumerate() {
            let row = result.map_err(|e| {
                data_source_error(format!("CSV parse error at row {}: {}", row_idx + 2, e))
            })?;

            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let cell = |column: Column| -> Option<String> {
                layout
                    .position(column)
                    .and_then(|index| row.get(index))
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            };

            let raw_date = cell(Column::GaDate);
            let ga_date = raw_date.as_deref().and_then(parse_ga_date);
            if raw_date.is_some() && ga_date.is_none() {
                store.unparsed_dates += 1;
            }

            let record = ReleaseRecord::new(
                cell(Column::ProductSuite).unwrap_or_default(),
                cell(Column::ReleaseName),
                cell(Column::BusinessUnit).unwrap_or_default(),
            )
            .with_ga_date(ga_date)
            .with_ga_name(cell(Column::GaName))
            .with_maintainer(cell(Column::Maintainer))
            .with_link(cell(Column::Link));

            store.records.push(record);
        }

        Ok(store)
    }

    pub fn records(&self) -> &[ReleaseRecord] {
        &self.records
    }

    /// Non-empty GA date cells that matched no accepted format.
    pub fn unparsed_dates(&self) -> usize {
        self.unparsed_dates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lowercases, turns `_`/`-` into spaces and collapses whitespace.
fn normalize_header(header: &str) -> String {
    header
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parses a GA date cell; `None` for TBD, maintenance-phase text and the like.
pub(crate) fn parse_ga_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|date_time| date_time.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
BU,Product,Release,GA date,GA name,Maintainers,Link
Hybrid Platforms,Red Hat OpenShift Container Platform,OpenShift Container Platform 4.20,2026-11-18,OCP 4.20 GA,Jane Doe,https://example.com/ocp-4.20
Hybrid Platforms,Red Hat Quay,Quay 3.16,TBD,Quay 3.16 GA,,https://example.com/quay-3.16
";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_csv_builds_records() {
        let store = RecordStore::from_csv(EXPORT, Path::new("export.csv")).unwrap();

        assert_eq!(store.len(), 2);
        let ocp = &store.records()[0];
        assert_eq!(ocp.product_suite(), "Red Hat OpenShift Container Platform");
        assert_eq!(ocp.release_name(), Some("OpenShift Container Platform 4.20"));
        assert_eq!(ocp.business_unit(), "Hybrid Platforms");
        assert_eq!(ocp.ga_date(), Some(date(2026, 11, 18)));
        assert_eq!(ocp.ga_name(), Some("OCP 4.20 GA"));
        assert_eq!(ocp.maintainer(), Some("Jane Doe"));
        assert_eq!(ocp.link(), Some("https://example.com/ocp-4.20"));
    }

    #[test]
    fn test_unparseable_date_becomes_none_and_is_counted() {
        let store = RecordStore::from_csv(EXPORT, Path::new("export.csv")).unwrap();

        let quay = &store.records()[1];
        assert_eq!(quay.ga_date(), None);
        assert_eq!(quay.maintainer(), None);
        assert_eq!(store.unparsed_dates(), 1);
    }

    #[test]
    fn test_header_variants_are_normalized() {
        let content = "  business_unit , PRODUCT  SUITE,release-name,Ga Date,GA_NAME,maintainer,URL\n\
                       BU1,Suite A,Suite A 2.0,2027-01-05,GA,Someone,http://x\n";
        let store = RecordStore::from_csv(content, Path::new("export.csv")).unwrap();

        let record = &store.records()[0];
        assert_eq!(record.business_unit(), "BU1");
        assert_eq!(record.product_suite(), "Suite A");
        assert_eq!(record.release_name(), Some("Suite A 2.0"));
        assert_eq!(record.ga_date(), Some(date(2027, 1, 5)));
        assert_eq!(record.link(), Some("http://x"));
    }

    #[test]
    fn test_missing_required_columns() {
        let content = "Product,Release,BU\nSuite A,Suite A 2.0,BU1\n";
        let err = RecordStore::from_csv(content, Path::new("export.csv")).unwrap_err();

        match err {
            RadarError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["GA date", "GA name", "Link"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_maintainer_column_is_optional() {
        let content = "Product,Release,BU,GA date,GA name,Link\nSuite A,Suite A 2.0,BU1,2027-01-05,GA,http://x\n";
        let store = RecordStore::from_csv(content, Path::new("export.csv")).unwrap();
        assert_eq!(store.records()[0].maintainer(), None);
    }

    #[test]
    fn test_empty_content_is_a_data_source_error() {
        let err = RecordStore::from_csv("", Path::new("export.csv")).unwrap_err();
        assert!(matches!(err, RadarError::DataSource { .. }));
    }

    #[test]
    fn test_blank_rows_are_skipped_and_short_rows_tolerated() {
        let content = "Product,Release,BU,GA date,GA name,Link\n,,,,,\nSuite A,Suite A 2.0\n";
        let store = RecordStore::from_csv(content, Path::new("export.csv")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].business_unit(), "");
        assert_eq!(store.records()[0].ga_date(), None);
        assert_eq!(store.unparsed_dates(), 0);
    }

    #[test]
    fn test_parse_ga_date_formats() {
        let expected = Some(date(2026, 3, 9));
        assert_eq!(parse_ga_date("2026-03-09"), expected);
        assert_eq!(parse_ga_date("2026/03/09"), expected);
        assert_eq!(parse_ga_date("03/09/2026"), expected);
        assert_eq!(parse_ga_date("09-Mar-2026"), expected);
        assert_eq!(parse_ga_date("Mar 09, 2026"), expected);
        assert_eq!(parse_ga_date("9 March 2026"), expected);
        assert_eq!(parse_ga_date("2026-03-09 00:00:00"), expected);
        assert_eq!(parse_ga_date("2026-03-09T12:30:00"), expected);
        assert_eq!(parse_ga_date("2026-03-09T12:30:00+02:00"), expected);
        assert_eq!(parse_ga_date(" 2026-03-09 "), expected);
    }

    #[test]
    fn test_parse_ga_date_rejects_placeholders() {
        assert_eq!(parse_ga_date("TBD"), None);
        assert_eq!(parse_ga_date("Maintenance"), None);
        assert_eq!(parse_ga_date("2026-13-40"), None);
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  GA   date "), "ga date");
        assert_eq!(normalize_header("Release_Name"), "release name");
        assert_eq!(normalize_header("business-unit"), "business unit");
    }
}
