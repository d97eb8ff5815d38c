use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::{
    candidate::{Candidate, CandidateIdx},
    selection_problem::SelectionProblem,
};

use super::composition::{Composition, Violations};

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMethod {
    Exact,
    GreedyFallback,
}

/// Why the exact search did not produce the roster.
#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackReason {
    /// Fewer candidates than roster slots; the exact search was skipped.
    InsufficientPool,
    Infeasible,
    /// A time or node limit fired before optimality was proven.
    Terminated,
}

impl Display for SelectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMethod::Exact => write!(f, "EXACT"),
            SelectionMethod::GreedyFallback => write!(f, "GREEDY_FALLBACK"),
        }
    }
}

impl Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::InsufficientPool => write!(f, "pool smaller than the squad"),
            FallbackReason::Infeasible => write!(f, "no roster meets every constraint"),
            FallbackReason::Terminated => write!(f, "exact search stopped early"),
        }
    }
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct SelectionResult {
    selected: Vec<Candidate>,
    total_score: f64,
    method_used: SelectionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_reason: Option<FallbackReason>,
    composition: Composition,
    violations: Violations,
}

impl SelectionResult {
    pub(crate) fn new(
        problem: &SelectionProblem,
        selected: &[CandidateIdx],
        method_used: SelectionMethod,
        fallback_reason: Option<FallbackReason>,
    ) -> Self {
        let mut selected: Vec<Candidate> = selected
            .iter()
            .map(|&index| problem.candidate(index).clone())
            .collect();
        selected.sort_by(Candidate::ranking_cmp);

        let total_score = selected.iter().map(Candidate::predicted_score).sum();
        let composition = Composition::of(&selected);
        let violations = composition.violations(problem.constraints());

        SelectionResult {
            selected,
            total_score,
            method_used,
            fallback_reason,
            composition,
            violations,
        }
    }

    /// Score descending, ties by id ascending.
    pub fn selected(&self) -> &[Candidate] {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(Candidate::id).collect()
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn method_used(&self) -> SelectionMethod {
        self.method_used
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        self.fallback_reason
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Bounds of the request the roster does not meet.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    pub fn is_complete(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Roster in batting-card order: keeper, batters, all-rounders, bowlers.
    pub fn lineup(&self) -> Vec<&Candidate> {
        let mut lineup: Vec<&Candidate> = self.selected.iter().collect();
        lineup.sort_by(|a, b| {
            a.role()
                .display_order()
                .cmp(&b.role().display_order())
                .then_with(|| a.ranking_cmp(b))
        });
        lineup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::{constraint_set::ConstraintSet, role::Role},
        test_utils::{self, CandidateSpec},
    };

    fn problem() -> SelectionProblem {
        let candidates = test_utils::create_candidates(&[
            CandidateSpec::new("bowler", 70.0, Role::Bowler),
            CandidateSpec::new("keeper", 60.0, Role::Wicketkeeper),
            CandidateSpec::new("batter", 80.0, Role::Batter).overseas(),
        ]);

        SelectionProblem::new(candidates, ConstraintSet::unconstrained(3)).unwrap()
    }

    #[test]
    fn test_result_is_ranked_and_summed() {
        let problem = problem();
        let all: Vec<CandidateIdx> = (0..3).map(CandidateIdx::new).collect();
        let result = SelectionResult::new(&problem, &all, SelectionMethod::Exact, None);

        assert_eq!(result.selected_ids(), vec!["batter", "bowler", "keeper"]);
        assert!((result.total_score() - 210.0).abs() < 1e-9);
        assert_eq!(result.composition().overseas, 1);
        assert!(result.is_complete());

        let lineup: Vec<&str> = result.lineup().iter().map(|c| c.id()).collect();
        assert_eq!(lineup, vec!["keeper", "batter", "bowler"]);
    }

    #[test]
    fn test_serialized_method_names() {
        let problem = problem();
        let exact = SelectionResult::new(
            &problem,
            &[CandidateIdx::new(0)],
            SelectionMethod::Exact,
            None,
        );
        let json = serde_json::to_value(&exact).unwrap();
        assert_eq!(json["method_used"], "EXACT");
        assert!(json.get("fallback_reason").is_none());
        assert_eq!(json["violations"][0]["constraint"], "squad_size");

        let greedy = SelectionResult::new(
            &problem,
            &[CandidateIdx::new(0)],
            SelectionMethod::GreedyFallback,
            Some(FallbackReason::Infeasible),
        );
        let json = serde_json::to_value(&greedy).unwrap();
        assert_eq!(json["method_used"], "GREEDY_FALLBACK");
        assert_eq!(json["fallback_reason"], "INFEASIBLE");
        assert_eq!(SelectionMethod::GreedyFallback.to_string(), "GREEDY_FALLBACK");
    }
}
