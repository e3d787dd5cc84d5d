use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty-printed JSON
///
/// Absent optional values are emitted as `null` so that every release object
/// carries the same keys.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::test_fixtures::sample_model;
    use serde_json::Value;

    fn render() -> Value {
        let output = JsonFormatter::new().format(&sample_model()).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_top_level_sections() {
        let json = render();

        assert_eq!(json["metadata"]["tool_name"], "release-radar");
        assert_eq!(json["metadata"]["query_date"], "2026-10-15");
        assert_eq!(json["metadata"]["version_filters"][0]["abbreviation"], "OCP");
        assert_eq!(json["summary"]["total_groups"], 2);
        assert_eq!(json["summary"]["skipped_mapping_lines"], 1);
    }

    #[test]
    fn test_groups_keep_mapping_order() {
        let json = render();
        let groups = json["groups"].as_array().unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["product_suite"], "Red Hat OpenShift Container Platform");
        assert_eq!(groups[0]["releases"][0]["ga_date"], "2026-11-18");
        assert_eq!(groups[0]["releases"][0]["maintainer"], Value::Null);
        assert_eq!(groups[1]["has_future_releases"], false);
    }

    #[test]
    fn test_operator_entries() {
        let json = render();
        let operators = json["operators"].as_array().unwrap();

        assert_eq!(operators[0]["operator"], "cluster-logging");
        assert_eq!(operators[0]["strategy"], "product_suite_match");
        assert!(operators[0].get("release_name").is_none());
        assert_eq!(operators[1]["release_name"], "Quay 9.9");
        assert_eq!(operators[1]["strategy"], "no_match");
    }
}
