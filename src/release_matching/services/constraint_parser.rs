use crate::release_matching::domain::VersionConstraint;

/// Result of parsing a reference file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConstraint {
    pub constraint: VersionConstraint,
    /// 1-based numbers of lines that did not hold `ABBREVIATION VERSION`
    pub ignored_lines: Vec<usize>,
}

/// ConstraintParser - reads `ABBREVIATION VERSION_TOKEN` lines (e.g. `OCP 4.20`)
///
/// Tokens are whitespace separated; anything after the version token is
/// ignored. Blank lines and `#` comments are skipped silently.
pub struct ConstraintParser;

impl ConstraintParser {
    pub fn parse(content: &str) -> ParsedConstraint {
        let mut parsed = ParsedConstraint::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(abbreviation), Some(version)) => {
                    parsed.constraint.set(abbreviation, version);
                }
                _ => parsed.ignored_lines.push(index + 1),
            }
        }

        parsed
    }
}
