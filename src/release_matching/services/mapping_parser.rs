use crate::release_matching::domain::{MappingTable, OperatorMapping};
use crate::shared::error::MappingFormatError;

/// Field separator of the mapping table
const SEPARATOR: char = '\t';

/// Lines starting with this marker are ignored
const COMMENT_MARKER: char = '#';

/// MappingParser - reads the hand-maintained operator mapping table
///
/// Each line is `operator<TAB>product_suite[<TAB>release_name]`. Malformed
/// lines are skipped and recorded on the returned table; they never abort
/// the load.
pub struct MappingParser;

impl MappingParser {
    pub fn parse(content: &str) -> MappingTable {
        let mut table = MappingTable::new();
        let mut seen_content = false;

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim_end_matches('\r');
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
                continue;
            }

            // Spreadsheet exports of the table keep their header row
            let is_first = !seen_content;
            seen_content = true;
            if is_first && trimmed.starts_with("Operator") {
                continue;
            }

            match Self::parse_line(line) {
                Ok(mapping) => {
                    let operator = mapping.operator_name().to_string();
                    if !table.insert(mapping) {
                        table.record_skipped(MappingFormatError {
                            line_number,
                            line: line.to_string(),
                            reason: format!("duplicate operator '{}'", operator),
                        });
                    }
                }
                Err(reason) => table.record_skipped(MappingFormatError {
                    line_number,
                    line: line.to_string(),
                    reason,
                }),
            }
        }

        table
    }

    fn parse_line(line: &str) -> Result<OperatorMapping, String> {
        let mut fields: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();
        while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        if !(2..=3).contains(&fields.len()) {
            return Err(format!(
                "expected 2 or 3 tab-separated fields, found {}",
                fields.len()
            ));
        }

        let operator = strip_list_numbering(fields[0]);
        if operator.is_empty() {
            return Err("operator name is empty".to_string());
        }
        if fields[1].is_empty() {
            return Err("product suite is empty".to_string());
        }

        Ok(OperatorMapping::new(
            operator.to_string(),
            fields[1].to_string(),
            fields.get(2).map(|release| release.to_string()),
        ))
    }
}

/// Removes a leading `12. ` style list number from an operator name.
fn strip_list_numbering(name: &str) -> &str {
    let digits = name.len() - name.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(rest) = name[digits..].strip_prefix('.') {
            return rest.trim_start();
        }
    }
    name
}
