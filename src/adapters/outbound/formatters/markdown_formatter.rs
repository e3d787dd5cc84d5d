use crate::application::read_models::{
    OperatorMatchView, ProductGroupView, ReportReadModel, SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for release information
const RELEASE_TABLE_HEADER: &str =
    "| BU | Release | GA date | GA name | Maintainer | Link | Product |\n";

/// Markdown table separator line for the release table
const RELEASE_TABLE_SEPARATOR: &str =
    "|----|---------|---------|---------|------------|------|---------|\n";

/// Markdown table header for the operator breakdown
const OPERATOR_TABLE_HEADER: &str =
    "| Operator | Product | Strategy | Matched | Filtered out |\n";

/// Markdown table separator line for the operator breakdown
const OPERATOR_TABLE_SEPARATOR: &str =
    "|----------|---------|----------|---------|--------------|\n";

/// MarkdownFormatter adapter for the Markdown release report
///
/// Same content as the text report, rendered as headings and tables, plus a
/// per-operator match breakdown.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(value: Option<&str>) -> String {
        value
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Renders a link cell as a Markdown hyperlink when it looks like a URL
    fn link_cell(link: Option<&str>) -> String {
        match link {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                format!("[link]({})", url.replace('|', "%7C").replace(' ', "%20"))
            }
            other => Self::cell(other),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) {
        let meta = &model.metadata;
        output.push_str("# Upcoming Release Report\n\n");
        output.push_str(&format!("- **Generated:** {}\n", meta.generated_at));
        output.push_str(&format!("- **Query date:** {}\n", meta.query_date));
        output.push_str(&format!(
            "- **Export:** `{}` ({} records)\n",
            meta.export_source, meta.record_count
        ));

        if meta.show_all {
            output.push_str("- **Selection:** all matched releases\n");
        } else {
            output.push_str(&format!(
                "- **Selection:** closest {} release(s) on or after the query date\n",
                meta.closest_k
            ));
        }

        let filters = if !meta.version_filtering {
            "disabled".to_string()
        } else if meta.version_filters.is_empty() {
            "none".to_string()
        } else {
            meta.version_filters
                .iter()
                .map(|f| format!("{} {}", f.abbreviation, f.version))
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!("- **Version filter:** {}\n\n", filters));
    }

    fn render_group(&self, output: &mut String, group: &ProductGroupView) {
        output.push_str(&format!("### {}\n\n", group.product_suite));
        output.push_str(&format!(
            "Operators: {}\n\n",
            group
                .operators
                .iter()
                .map(|op| format!("`{}`", op))
                .collect::<Vec<_>>()
                .join(", ")
        ));

        if group.releases.is_empty() {
            output.push_str("*No releases to show*\n\n");
            return;
        }

        output.push_str(RELEASE_TABLE_HEADER);
        output.push_str(RELEASE_TABLE_SEPARATOR);
        for release in &group.releases {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&release.business_unit),
                Self::cell(release.release.as_deref()),
                Self::cell(release.ga_date.as_deref()),
                Self::cell(release.ga_name.as_deref()),
                Self::cell(release.maintainer.as_deref()),
                Self::link_cell(release.link.as_deref()),
                Self::escape_markdown_table_cell(&release.product_suite)
            ));
        }
        output.push('\n');
    }

    fn render_groups(&self, output: &mut String, model: &ReportReadModel) {
        let (with_title, without_title) = if model.metadata.show_all {
            ("Products with Matched Releases", "Products with No Matched Releases")
        } else {
            ("Products with Future Releases", "Products with No Future Releases")
        };

        output.push_str(&format!("## {}\n\n", with_title));
        let mut any = false;
        for group in model.groups_with_releases() {
            self.render_group(output, group);
            any = true;
        }
        if !any {
            output.push_str("*None*\n\n");
        }

        let without: Vec<&ProductGroupView> = model.groups_without_releases().collect();
        if !without.is_empty() {
            output.push_str(&format!("## {}\n\n", without_title));
            for group in without {
                output.push_str(&format!(
                    "- **{}**: {}\n",
                    Self::escape_markdown_table_cell(&group.product_suite),
                    group.operators.join(", ")
                ));
            }
            output.push('\n');
        }
    }

    fn render_operators(&self, output: &mut String, operators: &[OperatorMatchView]) {
        output.push_str("## Operator Matches\n\n");
        if operators.is_empty() {
            output.push_str("*No operator mappings*\n\n");
            return;
        }

        output.push_str(OPERATOR_TABLE_HEADER);
        output.push_str(OPERATOR_TABLE_SEPARATOR);
        for op in operators {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&op.operator),
                Self::escape_markdown_table_cell(&op.product_suite),
                op.strategy,
                op.matched_records,
                op.filtered_out
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        let rows = [
            ("Products analyzed", summary.total_groups),
            ("Products with future releases", summary.groups_with_future),
            ("Products with no future releases", summary.groups_without_future),
            ("Future releases found", summary.total_future_releases),
            ("Operators analyzed", summary.total_operators),
            ("Operators with future releases", summary.operators_with_future),
            ("Operators without future releases", summary.operators_without_future),
            ("Skipped mapping lines", summary.skipped_mapping_lines),
        ];
        for (label, count) in rows {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_groups(&mut output, model);
        self.render_operators(&mut output, &model.operators);
        self.render_summary(&mut output, &model.summary);

        Ok(output)
    }
}
