use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::SelectionError,
    problem::{
        candidate::{Candidate, CandidateBuilder},
        confidence_interval::ConfidenceInterval,
        constraint_set::ConstraintSet,
        role::Role,
    },
    solver::team_selector::SelectionRequest,
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "SelectionRequest")]
pub struct JsonSelectionRequest {
    pub id: Option<String>,
    pub candidates: Vec<JsonCandidate>,
    #[serde(default)]
    pub constraints: JsonConstraintSet,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename = "Candidate")]
pub struct JsonCandidate {
    pub id: String,
    pub predicted_score: f64,
    pub role: Role,
    #[serde(default)]
    pub is_overseas: bool,
    pub confidence_lo: Option<f64>,
    pub confidence_hi: Option<f64>,
}

impl From<&Candidate> for JsonCandidate {
    fn from(value: &Candidate) -> Self {
        JsonCandidate {
            id: value.id().to_owned(),
            predicted_score: value.predicted_score(),
            role: value.role(),
            is_overseas: value.is_overseas(),
            confidence_lo: value.confidence().map(|interval| interval.lo),
            confidence_hi: value.confidence().map(|interval| interval.hi),
        }
    }
}

impl JsonCandidate {
    /// `uncertainty` fills in an interval when the input carries none.
    pub fn build_candidate(self, uncertainty: Option<f64>) -> Candidate {
        let confidence = match (self.confidence_lo, self.confidence_hi) {
            (Some(lo), Some(hi)) => Some(ConfidenceInterval::new(lo, hi)),
            _ => uncertainty.map(|uncertainty| {
                ConfidenceInterval::from_uncertainty(self.predicted_score, uncertainty)
            }),
        };

        let mut builder = CandidateBuilder::new(self.id, self.predicted_score, self.role);
        builder.set_overseas(self.is_overseas);
        if let Some(confidence) = confidence {
            builder.set_confidence(confidence);
        }

        builder.build()
    }
}

/// Bounds are signed so that negative input reaches validation instead of
/// failing to parse. Missing fields take the [`ConstraintSet`] defaults.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename = "ConstraintSet")]
pub struct JsonConstraintSet {
    pub squad_size: Option<i64>,
    pub min_wicketkeepers: Option<i64>,
    pub max_wicketkeepers: Option<i64>,
    pub min_batters: Option<i64>,
    pub min_bowlers: Option<i64>,
    pub min_allrounders: Option<i64>,
    pub max_overseas: Option<i64>,
}

fn non_negative(
    name: &'static str,
    value: Option<i64>,
    default: usize,
) -> Result<usize, SelectionError> {
    match value {
        None => Ok(default),
        Some(value) => usize::try_from(value).map_err(|_| SelectionError::NegativeBound { name, value }),
    }
}

impl From<&ConstraintSet> for JsonConstraintSet {
    fn from(value: &ConstraintSet) -> Self {
        let signed = |value: usize| i64::try_from(value).unwrap_or(i64::MAX);

        JsonConstraintSet {
            squad_size: Some(signed(value.squad_size)),
            min_wicketkeepers: Some(signed(value.min_wicketkeepers)),
            max_wicketkeepers: value.max_wicketkeepers.map(signed),
            min_batters: Some(signed(value.min_batters)),
            min_bowlers: Some(signed(value.min_bowlers)),
            min_allrounders: Some(signed(value.min_allrounders)),
            max_overseas: Some(signed(value.max_overseas)),
        }
    }
}

impl JsonConstraintSet {
    /// Fields left out fall back to `defaults`.
    pub fn build_constraints(
        &self,
        defaults: &ConstraintSet,
    ) -> Result<ConstraintSet, SelectionError> {
        let squad_size = match self.squad_size {
            Some(value) if value <= 0 => return Err(SelectionError::NonPositiveSquadSize(value)),
            value => non_negative("squad_size", value, defaults.squad_size)?,
        };

        let max_wicketkeepers = match self.max_wicketkeepers {
            Some(value) => Some(non_negative("max_wicketkeepers", Some(value), 0)?),
            None => defaults.max_wicketkeepers,
        };

        let constraints = ConstraintSet {
            squad_size,
            min_wicketkeepers: non_negative(
                "min_wicketkeepers",
                self.min_wicketkeepers,
                defaults.min_wicketkeepers,
            )?,
            max_wicketkeepers,
            min_batters: non_negative("min_batters", self.min_batters, defaults.min_batters)?,
            min_bowlers: non_negative("min_bowlers", self.min_bowlers, defaults.min_bowlers)?,
            min_allrounders: non_negative(
                "min_allrounders",
                self.min_allrounders,
                defaults.min_allrounders,
            )?,
            max_overseas: non_negative("max_overseas", self.max_overseas, defaults.max_overseas)?,
        };

        constraints.validate()?;
        Ok(constraints)
    }
}

impl JsonSelectionRequest {
    pub fn from_candidates(
        id: Option<String>,
        candidates: &[Candidate],
        constraints: &ConstraintSet,
    ) -> Self {
        JsonSelectionRequest {
            id,
            candidates: candidates.iter().map(JsonCandidate::from).collect(),
            constraints: JsonConstraintSet::from(constraints),
        }
    }

    #[instrument(skip_all, level = "debug")]
    pub fn build_request(
        self,
        defaults: &ConstraintSet,
        uncertainty: Option<f64>,
    ) -> Result<SelectionRequest, SelectionError> {
        let constraints = self.constraints.build_constraints(defaults)?;

        let candidates = self
            .candidates
            .into_iter()
            .map(|candidate| candidate.build_candidate(uncertainty))
            .collect();

        Ok(SelectionRequest {
            id: self.id,
            candidates,
            constraints,
        })
    }
}
