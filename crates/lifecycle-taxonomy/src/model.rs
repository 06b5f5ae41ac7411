//! Taxonomy document model
//!
//! The on-disk shape is a JSON object mapping stage names to ordered lists of
//! substage records:
//!
//! ```json
//! { "PLAN": [ { "substage": "Data management plan",
//!               "description": "...",
//!               "tools": ["DMPTool", ""] } ] }
//! ```
//!
//! Parsing goes through [`serde_json::Value`] so that shape errors are
//! reported with a [`RecordLocation`] instead of a bare line/column.

use crate::error::{MalformedReason, RecordLocation, TaxonomyError, TaxonomyResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// One substage entry under a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstageRecord {
    /// Substage name
    pub substage: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tool names as they appear in the source, placeholders included
    pub tools: Vec<String>,
}

impl SubstageRecord {
    /// Create a record
    pub fn new(
        substage: impl Into<String>,
        description: Option<String>,
        tools: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            substage: substage.into(),
            description,
            tools: tools.into_iter().map(Into::into).collect(),
        }
    }

    /// Tool names with empty placeholders removed
    pub fn non_empty_tools(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(String::as_str).filter(|t| !t.is_empty())
    }
}

/// Whole taxonomy: stage name → substage records, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyDocument {
    stages: IndexMap<String, Vec<SubstageRecord>>,
}

impl TaxonomyDocument {
    /// Empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage (builder style)
    #[must_use]
    pub fn with_stage(mut self, name: impl Into<String>, records: Vec<SubstageRecord>) -> Self {
        self.stages.insert(name.into(), records);
        self
    }

    /// Parse and validate JSON text
    pub fn parse(text: &str) -> TaxonomyResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Validate an already-parsed JSON value
    pub fn from_value(value: &Value) -> TaxonomyResult<Self> {
        let root = value.as_object().ok_or_else(|| {
            TaxonomyError::malformed(RecordLocation::root(), wrong_type("object", value))
        })?;

        let mut stages = IndexMap::with_capacity(root.len());
        for (stage, records) in root {
            let list = records.as_array().ok_or_else(|| {
                TaxonomyError::malformed(RecordLocation::stage(stage), wrong_type("array", records))
            })?;
            let parsed = list
                .iter()
                .enumerate()
                .map(|(idx, record)| parse_record(stage, idx, record))
                .collect::<TaxonomyResult<Vec<_>>>()?;
            stages.insert(stage.clone(), parsed);
        }

        Ok(Self { stages })
    }

    /// Serialize back to pretty JSON
    pub fn to_json_pretty(&self) -> TaxonomyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stages in document order
    pub fn stages(&self) -> impl Iterator<Item = (&str, &[SubstageRecord])> {
        self.stages.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Stage names in document order
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.keys().map(String::as_str)
    }

    /// Records for one stage
    #[must_use]
    pub fn stage(&self, name: &str) -> Option<&[SubstageRecord]> {
        self.stages.get(name).map(Vec::as_slice)
    }

    /// Number of stages
    #[inline]
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Number of substage records across all stages
    #[must_use]
    pub fn substage_count(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }

    /// Number of non-empty tool names across all substages
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.stages
            .values()
            .flatten()
            .map(|r| r.non_empty_tools().count())
            .sum()
    }

    /// True if there are no stages
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl FromStr for TaxonomyDocument {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_record(stage: &str, idx: usize, value: &Value) -> TaxonomyResult<SubstageRecord> {
    let loc = RecordLocation::record(stage, idx);
    let obj = value
        .as_object()
        .ok_or_else(|| TaxonomyError::malformed(loc.clone(), wrong_type("object", value)))?;

    let substage = required_string(obj, &loc, "substage")?;
    let description = match obj.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(TaxonomyError::malformed(
                loc.with_field("description"),
                wrong_type("string", other),
            ))
        }
    };

    let tools_value = obj.get("tools").ok_or_else(|| {
        TaxonomyError::malformed(
            loc.clone().with_field("tools"),
            MalformedReason::MissingField("tools"),
        )
    })?;
    let entries = tools_value.as_array().ok_or_else(|| {
        TaxonomyError::malformed(loc.clone().with_field("tools"), wrong_type("array", tools_value))
    })?;

    let mut tools = Vec::with_capacity(entries.len());
    for (t, entry) in entries.iter().enumerate() {
        match entry {
            // null is a placeholder in hand-edited data, same as ""
            Value::Null => tools.push(String::new()),
            Value::String(s) => tools.push(s.clone()),
            other => {
                return Err(TaxonomyError::malformed(
                    loc.clone().with_field("tools").with_tool(t),
                    wrong_type("string", other),
                ))
            }
        }
    }

    Ok(SubstageRecord {
        substage,
        description,
        tools,
    })
}

fn required_string(
    obj: &Map<String, Value>,
    loc: &RecordLocation,
    field: &'static str,
) -> TaxonomyResult<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(TaxonomyError::malformed(
            loc.clone().with_field(field),
            wrong_type("string", other),
        )),
        None => Err(TaxonomyError::malformed(
            loc.clone().with_field(field),
            MalformedReason::MissingField(field),
        )),
    }
}

fn wrong_type(expected: &'static str, found: &Value) -> MalformedReason {
    MalformedReason::WrongType {
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_in_document_order() {
        let doc = TaxonomyDocument::parse(
            r#"{"PLAN": [], "COLLECT": [], "ANALYZE": []}"#,
        )
        .unwrap();
        let names: Vec<_> = doc.stage_names().collect();
        assert_eq!(names, vec!["PLAN", "COLLECT", "ANALYZE"]);
    }

    #[test]
    fn keeps_placeholders_but_counts_only_real_tools() {
        let doc = TaxonomyDocument::parse(
            r#"{"PLAN": [{"substage": "DMP", "description": "d", "tools": ["X", "", null]}]}"#,
        )
        .unwrap();
        let record = &doc.stage("PLAN").unwrap()[0];
        assert_eq!(record.tools.len(), 3);
        assert_eq!(record.non_empty_tools().collect::<Vec<_>>(), vec!["X"]);
        assert_eq!(doc.tool_count(), 1);
    }

    #[test]
    fn description_is_optional() {
        let doc = TaxonomyDocument::parse(r#"{"PLAN": [{"substage": "DMP", "tools": []}]}"#).unwrap();
        assert_eq!(doc.stage("PLAN").unwrap()[0].description, None);
    }

    #[test]
    fn missing_tools_is_malformed() {
        let err = TaxonomyDocument::parse(r#"{"PLAN": [{"substage": "DMP", "description": "d"}]}"#)
            .unwrap_err();
        match err {
            TaxonomyError::Malformed { location, reason } => {
                assert_eq!(location, RecordLocation::record("PLAN", 0).with_field("tools"));
                assert_eq!(reason, MalformedReason::MissingField("tools"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_string_name_is_malformed() {
        let err = TaxonomyDocument::parse(r#"{"PLAN": [{"substage": 7, "tools": []}]}"#).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("expected string, found number"));
    }

    #[test]
    fn non_string_tool_is_malformed() {
        let err = TaxonomyDocument::parse(r#"{"PLAN": [{"substage": "a", "tools": ["x", 3]}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("field 'tools'[1]"));
    }

    #[test]
    fn stage_value_must_be_array() {
        let err = TaxonomyDocument::parse(r#"{"PLAN": {"substage": "a"}}"#).unwrap_err();
        match err {
            TaxonomyError::Malformed { location, reason } => {
                assert_eq!(location, RecordLocation::stage("PLAN"));
                assert_eq!(
                    reason,
                    MalformedReason::WrongType {
                        expected: "array",
                        found: "object"
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tools_must_be_array() {
        let err = TaxonomyDocument::parse(r#"{"PLAN": [{"substage": "a", "tools": "REDCap"}]}"#)
            .unwrap_err();
        match err {
            TaxonomyError::Malformed { location, reason } => {
                assert_eq!(location, RecordLocation::record("PLAN", 0).with_field("tools"));
                assert_eq!(
                    reason,
                    MalformedReason::WrongType {
                        expected: "array",
                        found: "string"
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn root_must_be_object() {
        let err = TaxonomyDocument::parse("[1, 2]").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().starts_with("malformed taxonomy at document root"));
    }

    #[test]
    fn invalid_json_is_syntax_error() {
        let err = TaxonomyDocument::parse("{ not json").unwrap_err();
        assert!(matches!(err, TaxonomyError::Syntax(_)));
    }

    #[test]
    fn builder_and_json_agree() {
        let built = TaxonomyDocument::new().with_stage(
            "SHARE",
            vec![SubstageRecord::new("Publish", Some("Deposit".into()), ["Zenodo"])],
        );
        let json = built.to_json_pretty().unwrap();
        assert_eq!(TaxonomyDocument::parse(&json).unwrap(), built);
    }
}
