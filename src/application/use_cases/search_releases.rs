use crate::application::dto::{ExportSource, SearchRequest, SearchResponse};
use crate::ports::outbound::{ConstraintReader, ExportReader, MappingReader, ProgressReporter};
use crate::release_matching::domain::{MappingTable, MatchResult, VersionConstraint};
use crate::release_matching::services::{
    Aggregator, ConstraintParser, MappingParser, Matcher, RecordStore, VersionFilter,
};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Skipped mapping lines listed individually before the summary line
const MAX_LISTED_SKIPPED_LINES: usize = 10;

/// SearchReleasesUseCase - loads the three inputs, matches and aggregates
///
/// # Type Parameters
/// * `ER` - ExportReader implementation
/// * `MR` - MappingReader implementation
/// * `CR` - ConstraintReader implementation
/// * `PR` - ProgressReporter implementation
pub struct SearchReleasesUseCase<ER, MR, CR, PR> {
    export_reader: ER,
    mapping_reader: MR,
    constraint_reader: CR,
    progress_reporter: PR,
}

impl<ER, MR, CR, PR> SearchReleasesUseCase<ER, MR, CR, PR>
where
    ER: ExportReader,
    MR: MappingReader,
    CR: ConstraintReader,
    PR: ProgressReporter,
{
    /// Creates a new SearchReleasesUseCase with injected dependencies
    pub fn new(
        export_reader: ER,
        mapping_reader: MR,
        constraint_reader: CR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            export_reader,
            mapping_reader,
            constraint_reader,
            progress_reporter,
        }
    }

    /// Executes the search
    ///
    /// # Errors
    /// Fails only when the export cannot be located, read or parsed, or the
    /// mapping table cannot be read. Malformed mapping lines, a missing
    /// reference file and unparseable dates are reported as warnings.
    pub fn execute(&self, request: SearchRequest) -> Result<SearchResponse> {
        // Step 1: Release export
        let (export_path, store) = self.load_records(&request.export)?;

        // Step 2: Version constraint (absent file or disabled = no filtering)
        let constraint = self.load_constraint(request.reference_path.as_deref())?;
        let filter = VersionFilter::new(request.lexicon.clone(), constraint);
        for abbreviation in filter.unknown_abbreviations() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: No product is known by abbreviation '{}'; its version filter has no effect.",
                abbreviation
            ));
        }

        // Step 3: Operator mapping table
        let table = self.load_mapping(&request.mapping_path)?;

        // Step 4: Match every mapping entry
        let match_results = self.match_operators(&filter, &table, &store);

        // Step 5: Group per product suite
        let report = Aggregator::new(request.today)
            .show_all(request.show_all)
            .closest_k(request.closest_k)
            .aggregate(&match_results);

        self.progress_reporter.report_completion(&format!(
            "✅ {} product(s) analyzed: {} with upcoming releases, {} without",
            report.summary.total_groups,
            report.summary.groups_with_future,
            report.summary.groups_without_future
        ));

        Ok(SearchResponse {
            report,
            match_results,
            constraint: filter.constraint().cloned(),
            export_path,
            record_count: store.len(),
            skipped_mapping_lines: table.skipped().len(),
            query_date: request.today,
            show_all: request.show_all,
            closest_k: request.closest_k,
        })
    }

    fn load_records(&self, source: &ExportSource) -> Result<(PathBuf, RecordStore)> {
        let export_path = match source {
            ExportSource::File(path) => path.clone(),
            ExportSource::Discover(dir) => self.export_reader.locate_export(dir)?,
        };

        self.progress_reporter.report(&format!(
            "📖 Loading release export from: {}",
            export_path.display()
        ));

        let content = self.export_reader.read_export(&export_path)?;
        let store = RecordStore::from_csv(&content, &export_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} release record(s)", store.len()));

        if store.unparsed_dates() > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} GA date value(s) could not be parsed and were treated as unknown.",
                store.unparsed_dates()
            ));
        }

        Ok((export_path, store))
    }

    fn load_constraint(&self, reference_path: Option<&Path>) -> Result<Option<VersionConstraint>> {
        let Some(path) = reference_path else {
            self.progress_reporter.report("ℹ️  Version filtering disabled");
            return Ok(None);
        };

        let Some(content) = self.constraint_reader.read_constraints(path)? else {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} not found, no version filtering will be applied",
                path.display()
            ));
            return Ok(None);
        };

        let parsed = ConstraintParser::parse(&content);
        if !parsed.ignored_lines.is_empty() {
            let lines: Vec<String> = parsed.ignored_lines.iter().map(|n| n.to_string()).collect();
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Ignored malformed line(s) {} in {} (expected 'ABBREVIATION VERSION')",
                lines.join(", "),
                path.display()
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ Loaded {} version filter(s) from {}",
            parsed.constraint.len(),
            path.display()
        ));

        Ok(Some(parsed.constraint))
    }

    fn load_mapping(&self, path: &Path) -> Result<MappingTable> {
        let content = self.mapping_reader.read_mapping(path)?;
        let table = MappingParser::parse(&content);

        self.progress_reporter.report(&format!(
            "✅ Loaded {} operator-product mapping(s)",
            table.len()
        ));

        let skipped = table.skipped();
        if !skipped.is_empty() {
            for error in skipped.iter().take(MAX_LISTED_SKIPPED_LINES) {
                self.progress_reporter
                    .report_warning(&format!("   Skipped mapping {}", error));
            }
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} malformed line(s) skipped in {}",
                skipped.len(),
                path.display()
            ));
        }

        if table.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} contains no operator mappings; the report will be empty.",
                path.display()
            ));
        }

        Ok(table)
    }

    fn match_operators(
        &self,
        filter: &VersionFilter,
        table: &MappingTable,
        store: &RecordStore,
    ) -> Vec<MatchResult> {
        let matcher = Matcher::new(filter);
        let total = table.len();

        table
            .entries()
            .iter()
            .enumerate()
            .map(|(index, mapping)| {
                let result = matcher.match_mapping(mapping, store.records());
                self.progress_reporter.report_progress(
                    index + 1,
                    total,
                    Some(mapping.operator_name()),
                );
                result
            })
            .collect()
    }
}
