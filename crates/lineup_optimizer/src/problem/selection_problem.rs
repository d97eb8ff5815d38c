use fxhash::FxHashSet;

use crate::{
    error::SelectionError,
    problem::{
        candidate::{Candidate, CandidateIdx},
        constraint_set::ConstraintSet,
    },
};

/// A validated candidate pool, ranked by score descending then id ascending,
/// together with the constraints of one selection call.
#[derive(Debug, Clone)]
pub struct SelectionProblem {
    candidates: Vec<Candidate>,
    constraints: ConstraintSet,
}

impl SelectionProblem {
    pub fn new(
        mut candidates: Vec<Candidate>,
        constraints: ConstraintSet,
    ) -> Result<Self, SelectionError> {
        if candidates.is_empty() {
            return Err(SelectionError::EmptyPool);
        }

        constraints.validate()?;

        let mut seen = FxHashSet::default();
        for candidate in &candidates {
            if !candidate.predicted_score().is_finite() {
                return Err(SelectionError::NonFiniteScore(candidate.id().to_owned()));
            }

            if !seen.insert(candidate.id()) {
                return Err(SelectionError::DuplicateCandidate(
                    candidate.id().to_owned(),
                ));
            }
        }

        candidates.sort_by(Candidate::ranking_cmp);

        Ok(SelectionProblem {
            candidates,
            constraints,
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, index: CandidateIdx) -> &Candidate {
        &self.candidates[index]
    }

    pub fn candidates_iter(&self) -> impl Iterator<Item = (CandidateIdx, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| (CandidateIdx::new(index), candidate))
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn squad_size(&self) -> usize {
        self.constraints.squad_size
    }

    /// Whether the pool is large enough to fill a full roster.
    pub fn has_full_pool(&self) -> bool {
        self.candidates.len() >= self.constraints.squad_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::role::Role, test_utils};

    #[test]
    fn test_candidates_are_ranked() {
        let problem = SelectionProblem::new(
            vec![
                Candidate::new("b", 10.0, Role::Batter),
                Candidate::new("a", 10.0, Role::Batter),
                Candidate::new("c", 30.0, Role::Bowler),
                Candidate::new("d", -5.0, Role::Wicketkeeper),
            ],
            ConstraintSet::unconstrained(2),
        )
        .unwrap();

        assert_eq!(
            problem
                .candidates()
                .iter()
                .map(|candidate| candidate.id())
                .collect::<Vec<_>>(),
            vec!["c", "a", "b", "d"]
        );
        assert_eq!(problem.candidate(CandidateIdx::new(0)).id(), "c");
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let result = SelectionProblem::new(vec![], ConstraintSet::default());
        assert_eq!(result.unwrap_err(), SelectionError::EmptyPool);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = SelectionProblem::new(
            vec![
                Candidate::new("x", 1.0, Role::Batter),
                Candidate::new("x", 2.0, Role::Bowler),
            ],
            ConstraintSet::unconstrained(1),
        );
        assert_eq!(
            result.unwrap_err(),
            SelectionError::DuplicateCandidate("x".to_owned())
        );
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let result = SelectionProblem::new(
            vec![Candidate::new("nan", f64::NAN, Role::Batter)],
            ConstraintSet::unconstrained(1),
        );
        assert_eq!(
            result.unwrap_err(),
            SelectionError::NonFiniteScore("nan".to_owned())
        );
    }

    #[test]
    fn test_small_pool_is_accepted() {
        let problem =
            SelectionProblem::new(test_utils::create_pool(5), ConstraintSet::default()).unwrap();
        assert!(!problem.has_full_pool());
        assert_eq!(problem.len(), 5);
    }
}
