//! The field pattern table.
//!
//! Matching is purely lexical: no range or calendar checks. Every pattern is
//! anchored at both ends.

use regex::Regex;

use crate::error::{Result, ValidateError};

/// Field names and their patterns, in evaluation order.
///
/// `blood_type` accepts both ASCII `-` and U+2212 MINUS SIGN as the negative
/// marker. Both spellings occur in source data.
pub const STANDARD_PATTERNS: &[(&str, &str)] = &[
    ("telephone", r"^\+7-\(\d{3}\)-\d{3}-\d{2}-\d{2}$"),
    ("height", r"^[1-2]\.\d{2}$"),
    ("inn", r"^\d{12}$"),
    ("identifier", r"^\d{2}-\d{2}/\d{2}$"),
    ("occupation", r"^[A-Za-zА-Яа-я\s\-]+$"),
    ("latitude", r"^-?\d{1,2}\.\d+$"),
    ("blood_type", r"^(A|B|AB|O)([+-]|[\x{2212}])$"),
    ("issn", r"^\d{4}-\d{4}$"),
    (
        "uuid",
        r"^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$",
    ),
    ("date", r"^\d{4}-\d{2}-\d{2}$"),
];

/// A single compiled field rule.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    regex: Regex,
}

impl FieldRule {
    pub fn new(field: impl Into<String>, pattern: &str) -> Result<Self> {
        let field = field.into();
        let regex = Regex::new(pattern).map_err(|source| ValidateError::InvalidPattern {
            field: field.clone(),
            source,
        })?;
        Ok(Self { field, regex })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Tests `value` against the rule. As with most regex engines' `$`, a
    /// single trailing `\n` before the end of the value is accepted.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
            || value
                .strip_suffix('\n')
                .is_some_and(|line| self.regex.is_match(line))
    }
}

/// Immutable, ordered mapping from field name to compiled rule.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<FieldRule>,
}

impl PatternTable {
    /// Compile the standard field table.
    pub fn standard() -> Result<Self> {
        Self::from_rules(STANDARD_PATTERNS)
    }

    /// Compile a table from `(field, pattern)` pairs, keeping their order.
    pub fn from_rules(rules: &[(&str, &str)]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|(field, pattern)| FieldRule::new(*field, pattern))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(rules = rules.len(), "compiled pattern table");
        Ok(Self { rules })
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(FieldRule::field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternTable {
    type Item = &'a FieldRule;
    type IntoIter = std::slice::Iter<'a, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: &str) -> FieldRule {
        PatternTable::standard()
            .unwrap()
            .rule(field)
            .cloned()
            .unwrap()
    }

    #[test]
    fn standard_table_has_every_field_in_order() {
        let table = PatternTable::standard().unwrap();
        let fields: Vec<&str> = table.fields().collect();
        assert_eq!(
            fields,
            vec![
                "telephone",
                "height",
                "inn",
                "identifier",
                "occupation",
                "latitude",
                "blood_type",
                "issn",
                "uuid",
                "date",
            ]
        );
    }

    #[test]
    fn telephone() {
        let rule = rule("telephone");
        assert!(rule.is_match("+7-(902)-123-45-67"));
        assert!(!rule.is_match("8-(902)-123-45-67"));
        assert!(!rule.is_match("+7-902-123-45-67"));
        assert!(!rule.is_match("+7-(902)-123-45-678"));
    }

    #[test]
    fn height() {
        let rule = rule("height");
        assert!(rule.is_match("1.75"));
        assert!(rule.is_match("2.00"));
        assert!(!rule.is_match("3.10"));
        assert!(!rule.is_match("1.7"));
        assert!(!rule.is_match("1,75"));
    }

    #[test]
    fn inn() {
        let rule = rule("inn");
        assert!(rule.is_match("123456789012"));
        assert!(!rule.is_match("12345678901"));
        assert!(!rule.is_match("1234567890123"));
    }

    #[test]
    fn identifier() {
        let rule = rule("identifier");
        assert!(rule.is_match("12-34/56"));
        assert!(!rule.is_match("12-34-56"));
    }

    #[test]
    fn occupation_accepts_latin_and_cyrillic() {
        let rule = rule("occupation");
        assert!(rule.is_match("Software Engineer"));
        assert!(rule.is_match("Инженер-программист"));
        assert!(!rule.is_match("Engineer 2"));
        assert!(!rule.is_match(""));
    }

    #[test]
    fn latitude() {
        let rule = rule("latitude");
        assert!(rule.is_match("55.7558"));
        assert!(rule.is_match("-3.5"));
        assert!(!rule.is_match("+3.5"));
        assert!(!rule.is_match("123.4"));
        assert!(!rule.is_match("12."));
    }

    #[test]
    fn blood_type_accepts_unicode_minus() {
        let rule = rule("blood_type");
        assert!(rule.is_match("AB+"));
        assert!(rule.is_match("O-"));
        assert!(rule.is_match("B\u{2212}"));
        assert!(!rule.is_match("C+"));
        assert!(!rule.is_match("A"));
        assert!(!rule.is_match("AB\u{2013}"));
    }

    #[test]
    fn issn() {
        let rule = rule("issn");
        assert!(rule.is_match("1234-5678"));
        assert!(!rule.is_match("1234 5678"));
    }

    #[test]
    fn uuid_requires_lowercase() {
        let rule = rule("uuid");
        assert!(rule.is_match("123e4567-e89b-12d3-a456-426614174000"));
        assert!(!rule.is_match("123E4567-E89B-12D3-A456-426614174000"));
        assert!(!rule.is_match("123e4567e89b12d3a456426614174000"));
    }

    #[test]
    fn date_is_lexical_only() {
        let rule = rule("date");
        assert!(rule.is_match("2024-01-31"));
        assert!(rule.is_match("2024-13-45"));
        assert!(!rule.is_match("31.01.2024"));
    }

    #[test]
    fn single_trailing_newline_is_accepted() {
        let rule = rule("date");
        assert!(rule.is_match("1999-12-31\n"));
        assert!(!rule.is_match("1999-12-31\n\n"));
        assert!(!rule.is_match("1999-12-31\r\n"));
        assert!(!rule.is_match("\n"));
    }

    #[test]
    fn invalid_pattern_names_field() {
        let err = PatternTable::from_rules(&[("broken", "(")]).unwrap_err();
        assert!(matches!(err, ValidateError::InvalidPattern { ref field, .. } if field == "broken"));
    }
}
