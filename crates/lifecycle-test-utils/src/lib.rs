//! Testing utilities for the lifecycle workspace
//!
//! Shared fixtures, proptest strategies and fake sources.

#![allow(missing_docs)]

use async_trait::async_trait;
use lifecycle_taxonomy::{SubstageRecord, TaxonomyDocument, TaxonomyError, TaxonomyResult, TaxonomySource};
use proptest::prelude::*;

/// Bundled sample dataset
pub const SAMPLE_JSON: &str = include_str!("../../../data/lifecycle_data.json");

/// Stage count of [`SAMPLE_JSON`]
pub const SAMPLE_STAGES: usize = 7;
/// Substage count of [`SAMPLE_JSON`]
pub const SAMPLE_SUBSTAGES: usize = 15;
/// Non-empty tool count of [`SAMPLE_JSON`]
pub const SAMPLE_TOOLS: usize = 31;

pub fn sample_document() -> TaxonomyDocument {
    TaxonomyDocument::parse(SAMPLE_JSON).unwrap()
}

/// Two stages, PLAN then COLLECT, with placeholder tools
pub fn plan_collect_document() -> TaxonomyDocument {
    TaxonomyDocument::new()
        .with_stage(
            "PLAN",
            vec![
                SubstageRecord::new("Data Management Planning", Some("Write the plan".into()), ["DMPTool", "", ""]),
                SubstageRecord::new("Ethics", None, Vec::<String>::new()),
            ],
        )
        .with_stage(
            "COLLECT",
            vec![SubstageRecord::new("Acquisition", Some("Gather data".into()), ["REDCap", "ODK"])],
        )
}

/// Source whose fetch always fails, like a rejected network request
#[derive(Debug, Clone, Default)]
pub struct FailingSource;

#[async_trait]
impl TaxonomySource for FailingSource {
    fn describe(&self) -> String {
        "failing:network".to_string()
    }

    async fn fetch(&self) -> TaxonomyResult<String> {
        Err(TaxonomyError::fetch(self.describe(), "simulated network error"))
    }
}

fn arb_tool() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        3 => "[A-Za-z][A-Za-z0-9 ]{0,8}",
    ]
}

fn arb_record() -> impl Strategy<Value = SubstageRecord> {
    (
        "[A-Za-z][a-z ]{0,10}",
        proptest::option::of("[a-z ]{0,20}"),
        proptest::collection::vec(arb_tool(), 0..5),
    )
        .prop_map(|(name, description, tools)| SubstageRecord::new(name, description, tools))
}

/// Arbitrary taxonomy with unique stage names `S0..Sn`
pub fn arb_document() -> impl Strategy<Value = TaxonomyDocument> {
    proptest::collection::vec(proptest::collection::vec(arb_record(), 0..5), 0..6).prop_map(|stages| {
        stages
            .into_iter()
            .enumerate()
            .fold(TaxonomyDocument::new(), |doc, (i, records)| doc.with_stage(format!("S{i}"), records))
    })
}
