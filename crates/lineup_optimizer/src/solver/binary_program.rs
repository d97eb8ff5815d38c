use fixedbitset::FixedBitSet;
use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::{candidate::Candidate, selection_problem::SelectionProblem};

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sense {
    AtLeast,
    AtMost,
}

/// `sum(x[i] for i in members) >= rhs` or `<= rhs` over binary variables.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    name: &'static str,
    members: FixedBitSet,
    sense: Sense,
    rhs: usize,
}

impl LinearConstraint {
    pub fn new(name: &'static str, members: FixedBitSet, sense: Sense, rhs: usize) -> Self {
        LinearConstraint {
            name,
            members,
            sense,
            rhs,
        }
    }

    pub fn at_least(name: &'static str, members: FixedBitSet, rhs: usize) -> Self {
        Self::new(name, members, Sense::AtLeast, rhs)
    }

    pub fn at_most(name: &'static str, members: FixedBitSet, rhs: usize) -> Self {
        Self::new(name, members, Sense::AtMost, rhs)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_member(&self, variable: usize) -> bool {
        self.members.contains(variable)
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn rhs(&self) -> usize {
        self.rhs
    }

    pub fn lhs(&self, assignment: &FixedBitSet) -> usize {
        self.members.intersection(assignment).count()
    }

    pub fn is_satisfied_by(&self, lhs: usize) -> bool {
        match self.sense {
            Sense::AtLeast => lhs >= self.rhs,
            Sense::AtMost => lhs <= self.rhs,
        }
    }
}

/// Maximise `objective · x` over `x ∈ {0,1}^n` with exactly `cardinality`
/// variables set and every linear constraint satisfied.
#[derive(Debug, Clone)]
pub struct BinaryProgram {
    objective: Vec<f64>,
    cardinality: usize,
    constraints: Vec<LinearConstraint>,
}

impl BinaryProgram {
    pub fn new(objective: Vec<f64>, cardinality: usize) -> Self {
        BinaryProgram {
            objective,
            cardinality,
            constraints: Vec::new(),
        }
    }

    /// One variable per ranked candidate; variable `i` is candidate `CandidateIdx(i)`.
    pub fn from_problem(problem: &SelectionProblem) -> Self {
        let candidates = problem.candidates();
        let constraints = problem.constraints();

        let mut program = BinaryProgram::new(
            candidates
                .iter()
                .map(Candidate::predicted_score)
                .collect(),
            constraints.squad_size,
        );

        let members = |predicate: fn(&Candidate) -> bool| -> FixedBitSet {
            let mut set = FixedBitSet::with_capacity(candidates.len());
            for (index, candidate) in candidates.iter().enumerate() {
                set.set(index, predicate(candidate));
            }
            set
        };

        let wicketkeepers = members(|candidate| candidate.role().is_wicketkeeper());

        program.add_constraint(LinearConstraint::at_least(
            "min_wicketkeepers",
            wicketkeepers.clone(),
            constraints.min_wicketkeepers,
        ));

        if let Some(max_wicketkeepers) = constraints.max_wicketkeepers {
            program.add_constraint(LinearConstraint::at_most(
                "max_wicketkeepers",
                wicketkeepers,
                max_wicketkeepers,
            ));
        }

        program.add_constraint(LinearConstraint::at_least(
            "min_batters",
            members(|candidate| candidate.role().counts_as_batter()),
            constraints.min_batters,
        ));

        program.add_constraint(LinearConstraint::at_least(
            "min_bowlers",
            members(|candidate| candidate.role().counts_as_bowler()),
            constraints.min_bowlers,
        ));

        program.add_constraint(LinearConstraint::at_least(
            "min_allrounders",
            members(|candidate| candidate.role().is_allrounder()),
            constraints.min_allrounders,
        ));

        program.add_constraint(LinearConstraint::at_most(
            "max_overseas",
            members(Candidate::is_overseas),
            constraints.max_overseas,
        ));

        program
    }

    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective_value(&self, assignment: &FixedBitSet) -> f64 {
        assignment.ones().map(|index| self.objective[index]).sum()
    }

    pub fn is_feasible(&self, assignment: &FixedBitSet) -> bool {
        assignment.count_ones(..) == self.cardinality
            && self
                .constraints
                .iter()
                .all(|constraint| constraint.is_satisfied_by(constraint.lhs(assignment)))
    }
}
