use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::{confidence_interval::ConfidenceInterval, role::Role};

/// Position of a candidate inside a ranked [`SelectionProblem`](super::selection_problem::SelectionProblem).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CandidateIdx(usize);

impl CandidateIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for CandidateIdx {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CandidateIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Index<CandidateIdx> for [Candidate] {
    type Output = Candidate;
    fn index(&self, index: CandidateIdx) -> &Self::Output {
        &self[index.0]
    }
}

impl std::ops::Index<CandidateIdx> for Vec<Candidate> {
    type Output = Candidate;
    fn index(&self, index: CandidateIdx) -> &Self::Output {
        &self[index.0]
    }
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Candidate {
    id: String,
    predicted_score: f64,
    role: Role,
    is_overseas: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<ConfidenceInterval>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, predicted_score: f64, role: Role) -> Self {
        Candidate {
            id: id.into(),
            predicted_score,
            role,
            is_overseas: false,
            confidence: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn predicted_score(&self) -> f64 {
        self.predicted_score
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_overseas(&self) -> bool {
        self.is_overseas
    }

    pub fn confidence(&self) -> Option<ConfidenceInterval> {
        self.confidence
    }

    pub fn set_confidence(&mut self, confidence: ConfidenceInterval) {
        self.confidence = Some(confidence);
    }

    /// Ranking used everywhere a deterministic order is needed:
    /// highest score first, then id ascending.
    pub fn ranking_cmp(&self, other: &Candidate) -> Ordering {
        other
            .predicted_score
            .total_cmp(&self.predicted_score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

pub struct CandidateBuilder {
    id: String,
    predicted_score: f64,
    role: Role,
    is_overseas: Option<bool>,
    confidence: Option<ConfidenceInterval>,
}

impl CandidateBuilder {
    pub fn new(id: impl Into<String>, predicted_score: f64, role: Role) -> Self {
        CandidateBuilder {
            id: id.into(),
            predicted_score,
            role,
            is_overseas: None,
            confidence: None,
        }
    }

    pub fn set_overseas(&mut self, is_overseas: bool) -> &mut CandidateBuilder {
        self.is_overseas = Some(is_overseas);
        self
    }

    pub fn set_confidence(&mut self, confidence: ConfidenceInterval) -> &mut CandidateBuilder {
        self.confidence = Some(confidence);
        self
    }

    pub fn build(self) -> Candidate {
        Candidate {
            id: self.id,
            predicted_score: self.predicted_score,
            role: self.role,
            is_overseas: self.is_overseas.unwrap_or(false),
            confidence: self.confidence,
        }
    }
}
