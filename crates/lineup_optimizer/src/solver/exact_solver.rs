use fixedbitset::FixedBitSet;

use super::{
    binary_program::BinaryProgram,
    solver_params::{SolverParams, Termination},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub nodes: usize,
    pub pruned_by_bound: usize,
    pub pruned_by_constraints: usize,
    pub improvements: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExactStatus {
    /// Proven global optimum.
    Optimal {
        assignment: FixedBitSet,
        objective: f64,
    },
    /// No assignment satisfies every constraint.
    Infeasible,
    /// A termination limit fired before the search completed.
    Terminated(Termination),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExactOutcome {
    pub status: ExactStatus,
    pub statistics: SearchStatistics,
}

/// Any method that returns the global optimum of a [`BinaryProgram`] or
/// reports that none exists.
pub trait ExactSolver: Send + Sync {
    fn solver_name(&self) -> &'static str;

    fn solve(&self, program: &BinaryProgram, params: &SolverParams) -> ExactOutcome;
}

impl<S: ExactSolver + ?Sized> ExactSolver for &S {
    fn solver_name(&self) -> &'static str {
        (**self).solver_name()
    }

    fn solve(&self, program: &BinaryProgram, params: &SolverParams) -> ExactOutcome {
        (**self).solve(program, params)
    }
}
