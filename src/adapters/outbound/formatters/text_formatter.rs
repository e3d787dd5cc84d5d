use crate::application::read_models::{ProductGroupView, ReleaseView, ReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

const WIDE_RULE_WIDTH: usize = 80;
const GROUP_RULE_WIDTH: usize = 60;
const RECORD_RULE_WIDTH: usize = 40;

/// Placeholder for empty optional columns
const NOT_AVAILABLE: &str = "N/A";

/// TextFormatter adapter producing the plain-text release report
///
/// Layout: header, groups with releases, groups without, summary, footer.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn rule(output: &mut String, ch: char, width: usize) {
        output.push_str(&ch.to_string().repeat(width));
        output.push('\n');
    }

    fn section(output: &mut String, title: &str) {
        output.push('\n');
        Self::rule(output, '=', WIDE_RULE_WIDTH);
        output.push_str(title);
        output.push('\n');
        Self::rule(output, '=', WIDE_RULE_WIDTH);
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) -> std::fmt::Result {
        let meta = &model.metadata;
        writeln!(output, "Upcoming Release Report")?;
        writeln!(output, "Generated: {}", meta.generated_at)?;
        writeln!(output, "Export: {} ({} records)", meta.export_source, meta.record_count)?;
        if meta.show_all {
            writeln!(output, "Filter: Showing all matched releases")?;
        } else {
            writeln!(
                output,
                "Filter: Only showing the {} closest release(s) with GA dates on or after {}",
                meta.closest_k, meta.query_date
            )?;
        }

        if !meta.version_filtering {
            writeln!(output, "Version Filter: disabled")?;
        } else if !meta.version_filters.is_empty() {
            let filters: Vec<String> = meta
                .version_filters
                .iter()
                .map(|f| format!("{}: {}", f.abbreviation, f.version))
                .collect();
            writeln!(output, "Version Filter: {}", filters.join(", "))?;
        }
        Ok(())
    }

    fn render_release(&self, output: &mut String, release: &ReleaseView) -> std::fmt::Result {
        let or_na = |value: &Option<String>| value.as_deref().unwrap_or(NOT_AVAILABLE).to_string();

        writeln!(output, "  BU: {}", release.business_unit)?;
        writeln!(output, "  Release: {}", or_na(&release.release))?;
        writeln!(output, "  GA date: {}", or_na(&release.ga_date))?;
        writeln!(output, "  GA name: {}", or_na(&release.ga_name))?;
        writeln!(output, "  Maintainer: {}", or_na(&release.maintainer))?;
        writeln!(output, "  Link: {}", or_na(&release.link))?;
        writeln!(output, "  Product: {}", release.product_suite)?;
        output.push_str("  ");
        Self::rule(output, '-', RECORD_RULE_WIDTH);
        Ok(())
    }

    fn render_group_heading(
        &self,
        output: &mut String,
        index: usize,
        group: &ProductGroupView,
    ) -> std::fmt::Result {
        writeln!(output, "\nProduct {}: {}", index, group.product_suite)?;
        writeln!(output, "Operators: {}", group.operators.join(", "))?;
        Ok(())
    }

    fn render_groups_with_releases(
        &self,
        output: &mut String,
        model: &ReportReadModel,
    ) -> std::fmt::Result {
        let groups: Vec<&ProductGroupView> = model.groups_with_releases().collect();
        if groups.is_empty() {
            return Ok(());
        }

        let title = if model.metadata.show_all {
            "PRODUCTS WITH MATCHED RELEASES"
        } else {
            "PRODUCTS WITH FUTURE RELEASES"
        };
        Self::section(output, &format!("{} ({} products)", title, groups.len()));

        for (index, group) in groups.iter().enumerate() {
            self.render_group_heading(output, index + 1, group)?;
            Self::rule(output, '-', GROUP_RULE_WIDTH);

            if model.metadata.show_all {
                writeln!(
                    output,
                    "Found {} release(s), {} upcoming:",
                    group.releases.len(),
                    group.future_count
                )?;
            } else if group.future_count > group.releases.len() {
                writeln!(
                    output,
                    "Found {} future release(s), showing the closest {}:",
                    group.future_count,
                    group.releases.len()
                )?;
            } else {
                writeln!(output, "Found {} future release(s):", group.future_count)?;
            }

            for release in &group.releases {
                self.render_release(output, release)?;
            }
        }
        Ok(())
    }

    fn render_groups_without_releases(
        &self,
        output: &mut String,
        model: &ReportReadModel,
    ) -> std::fmt::Result {
        let groups: Vec<&ProductGroupView> = model.groups_without_releases().collect();
        if groups.is_empty() {
            return Ok(());
        }

        let (title, status) = if model.metadata.show_all {
            (
                "PRODUCTS WITH NO MATCHED RELEASES",
                "Status: No matching releases found".to_string(),
            )
        } else {
            (
                "PRODUCTS WITH NO FUTURE RELEASES",
                format!(
                    "Status: No future releases found (on or after {})",
                    model.metadata.query_date
                ),
            )
        };
        Self::section(output, &format!("{} ({} products)", title, groups.len()));

        for (index, group) in groups.iter().enumerate() {
            self.render_group_heading(output, index + 1, group)?;
            writeln!(output, "{}", status)?;
            Self::rule(output, '-', GROUP_RULE_WIDTH);
        }
        Ok(())
    }

    fn render_summary(&self, output: &mut String, model: &ReportReadModel) -> std::fmt::Result {
        let summary = &model.summary;
        Self::section(output, "SUMMARY");
        writeln!(output, "Query date: {}", model.metadata.query_date)?;
        writeln!(output, "Products with future releases: {}", summary.groups_with_future)?;
        writeln!(output, "Products with no future releases: {}", summary.groups_without_future)?;
        writeln!(output, "Total future releases found: {}", summary.total_future_releases)?;
        writeln!(output, "Total products analyzed: {}", summary.total_groups)?;
        if summary.skipped_mapping_lines > 0 {
            writeln!(output, "Skipped mapping lines: {}", summary.skipped_mapping_lines)?;
        }

        writeln!(output, "\nOperator Answer Breakdown:")?;
        Self::rule(output, '-', RECORD_RULE_WIDTH);
        writeln!(output, "Operators with future releases: {}", summary.operators_with_future)?;
        writeln!(output, "Operators without future releases: {}", summary.operators_without_future)?;
        writeln!(output, "Total operators analyzed: {}", summary.total_operators)?;

        writeln!(output, "\nProduct Operator Breakdown:")?;
        Self::rule(output, '-', RECORD_RULE_WIDTH);
        for group in &model.groups {
            writeln!(output, "{}: {} operators", group.product_suite, group.operators.len())?;
        }
        Ok(())
    }

    fn render_footer(&self, output: &mut String, model: &ReportReadModel) -> std::fmt::Result {
        output.push('\n');
        Self::rule(output, '=', WIDE_RULE_WIDTH);
        writeln!(
            output,
            "Report generated by {} {}",
            model.metadata.tool_name, model.metadata.tool_version
        )?;
        Self::rule(output, '=', WIDE_RULE_WIDTH);
        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model)?;
        self.render_groups_with_releases(&mut output, model)?;
        self.render_groups_without_releases(&mut output, model)?;
        self.render_summary(&mut output, model)?;
        self.render_footer(&mut output, model)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::test_fixtures::sample_model;

    #[test]
    fn test_header_lists_filters() {
        let output = TextFormatter::new().format(&sample_model()).unwrap();

        assert!(output.starts_with("Upcoming Release Report\n"));
        assert!(output.contains("Generated: 2026-10-15 09:30:00"));
        assert!(output.contains("Version Filter: OCP: 4.20"));
        assert!(output.contains("on or after 2026-10-15"));
    }

    #[test]
    fn test_release_fields_are_rendered() {
        let output = TextFormatter::new().format(&sample_model()).unwrap();

        assert!(output.contains("PRODUCTS WITH FUTURE RELEASES (1 products)"));
        assert!(output.contains("Product 1: Red Hat OpenShift Container Platform"));
        assert!(output.contains("Operators: cluster-logging"));
        assert!(output.contains("  Release: OpenShift Container Platform 4.20"));
        assert!(output.contains("  GA date: 2026-11-18"));
        assert!(output.contains("  Maintainer: N/A"));
        assert!(output.contains("  Link: https://example.com/ocp|4.20"));
    }

    #[test]
    fn test_groups_without_releases_section() {
        let output = TextFormatter::new().format(&sample_model()).unwrap();

        assert!(output.contains("PRODUCTS WITH NO FUTURE RELEASES (1 products)"));
        assert!(output.contains("Product 1: Red Hat Quay\nOperators: quay-operator\n"));
    }

    #[test]
    fn test_summary_block() {
        let output = TextFormatter::new().format(&sample_model()).unwrap();

        assert!(output.contains("Products with future releases: 1"));
        assert!(output.contains("Products with no future releases: 1"));
        assert!(output.contains("Total future releases found: 1"));
        assert!(output.contains("Skipped mapping lines: 1"));
        assert!(output.contains("Total operators analyzed: 2"));
        assert!(output.contains("Red Hat Quay: 1 operators"));
    }

    #[test]
    fn test_disabled_version_filter() {
        let mut model = sample_model();
        model.metadata.version_filtering = false;
        model.metadata.version_filters.clear();

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("Version Filter: disabled"));
    }

    #[test]
    fn test_show_all_labels() {
        let mut model = sample_model();
        model.metadata.show_all = true;

        let output = TextFormatter::new().format(&model).unwrap();

        assert!(output.contains("Filter: Showing all matched releases"));
        assert!(output.contains("PRODUCTS WITH MATCHED RELEASES"));
        assert!(output.contains("Found 1 release(s), 1 upcoming:"));
    }
}
