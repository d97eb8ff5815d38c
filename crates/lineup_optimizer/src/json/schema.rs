use schemars::schema_for;

use crate::{json::types, solver::selection_result::SelectionResult};

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonSelectionRequest))
}

pub fn generate_result_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(SelectionResult))
}
