use fixedbitset::FixedBitSet;
use jiff::{SignedDuration, Timestamp};
use tracing::{Level, debug, instrument};

use super::{
    binary_program::{BinaryProgram, Sense},
    exact_solver::{ExactOutcome, ExactSolver, ExactStatus, SearchStatistics},
    solver_params::{SolverParams, Termination},
};

const EPSILON: f64 = 1e-9;

/// Reading the clock on every node dominates the search on small pools.
const CLOCK_CHECK_INTERVAL: usize = 1024;

/// Depth-first branch and bound over the variables in objective order.
///
/// Each node decides one variable, trying "selected" before "not selected".
/// A subtree is cut when the best `k` remaining coefficients cannot beat the
/// incumbent, or when some constraint can no longer be met with the slots
/// left. The incumbent only changes on a strict improvement, so among equal
/// optima the one reached first (highest coefficients, lowest index) is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBound;

impl ExactSolver for BranchAndBound {
    fn solver_name(&self) -> &'static str {
        "branch_and_bound"
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(variables = program.num_variables()))]
    fn solve(&self, program: &BinaryProgram, params: &SolverParams) -> ExactOutcome {
        let mut search = Search::new(program, params);
        search.explore(0);

        debug!(
            nodes = search.statistics.nodes,
            pruned_by_bound = search.statistics.pruned_by_bound,
            pruned_by_constraints = search.statistics.pruned_by_constraints,
            improvements = search.statistics.improvements,
            "Branch and bound finished"
        );

        let status = if let Some(termination) = search.terminated {
            ExactStatus::Terminated(termination)
        } else if let Some((assignment, objective)) = search.best {
            ExactStatus::Optimal {
                assignment,
                objective,
            }
        } else {
            ExactStatus::Infeasible
        };

        ExactOutcome {
            status,
            statistics: search.statistics,
        }
    }
}

struct Search<'a> {
    program: &'a BinaryProgram,
    /// Variables sorted by objective descending, ties by index.
    order: Vec<usize>,
    /// `prefix[k]` is the sum of the first `k` coefficients in `order`.
    prefix: Vec<f64>,
    /// `remaining_members[c][k]` counts members of constraint `c` in `order[k..]`.
    remaining_members: Vec<Vec<usize>>,

    lhs: Vec<usize>,
    assignment: FixedBitSet,
    selected: usize,
    objective: f64,

    best: Option<(FixedBitSet, f64)>,
    statistics: SearchStatistics,

    max_nodes: Option<usize>,
    max_duration: Option<SignedDuration>,
    start: Timestamp,
    terminated: Option<Termination>,
}

impl<'a> Search<'a> {
    fn new(program: &'a BinaryProgram, params: &SolverParams) -> Self {
        let n = program.num_variables();
        let objective = program.objective();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| objective[b].total_cmp(&objective[a]));

        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(0.0);
        for &variable in &order {
            let last = prefix[prefix.len() - 1];
            prefix.push(last + objective[variable]);
        }

        let remaining_members = program
            .constraints()
            .iter()
            .map(|constraint| {
                let mut counts = vec![0; n + 1];
                for k in (0..n).rev() {
                    counts[k] = counts[k + 1] + usize::from(constraint.is_member(order[k]));
                }
                counts
            })
            .collect();

        Search {
            program,
            order,
            prefix,
            remaining_members,
            lhs: vec![0; program.constraints().len()],
            assignment: FixedBitSet::with_capacity(n),
            selected: 0,
            objective: 0.0,
            best: None,
            statistics: SearchStatistics::default(),
            max_nodes: params.max_nodes(),
            max_duration: params.max_duration(),
            start: Timestamp::now(),
            terminated: None,
        }
    }

    fn should_terminate(&mut self) -> bool {
        if self.terminated.is_some() {
            return true;
        }

        if let Some(max_nodes) = self.max_nodes
            && self.statistics.nodes > max_nodes
        {
            self.terminated = Some(Termination::Nodes(max_nodes));
            return true;
        }

        if let Some(max_duration) = self.max_duration
            && self.statistics.nodes % CLOCK_CHECK_INTERVAL == 0
            && Timestamp::now().duration_since(self.start) > max_duration
        {
            self.terminated = Some(Termination::Duration(max_duration));
            return true;
        }

        false
    }

    /// Whether every constraint can still be satisfied by choosing exactly
    /// `slots` more variables among `order[depth..]`.
    fn constraints_reachable(&self, depth: usize, slots: usize) -> bool {
        let undecided = self.order.len() - depth;

        self.program
            .constraints()
            .iter()
            .enumerate()
            .all(|(index, constraint)| {
                let members = self.remaining_members[index][depth];
                let lhs = self.lhs[index];

                match constraint.sense() {
                    Sense::AtLeast => lhs + members.min(slots) >= constraint.rhs(),
                    Sense::AtMost => {
                        let forced = slots.saturating_sub(undecided - members);
                        lhs + forced <= constraint.rhs()
                    }
                }
            })
    }

    fn explore(&mut self, depth: usize) {
        self.statistics.nodes += 1;
        if self.should_terminate() {
            return;
        }

        let slots = self.program.cardinality().saturating_sub(self.selected);
        let undecided = self.order.len() - depth;

        if undecided < slots || !self.constraints_reachable(depth, slots) {
            self.statistics.pruned_by_constraints += 1;
            return;
        }

        if slots == 0 {
            self.record_incumbent();
            return;
        }

        let bound = self.objective + self.prefix[depth + slots] - self.prefix[depth];
        if let Some((_, best)) = &self.best
            && bound <= *best + EPSILON
        {
            self.statistics.pruned_by_bound += 1;
            return;
        }

        let variable = self.order[depth];

        self.set_variable(variable, true);
        self.explore(depth + 1);
        self.set_variable(variable, false);

        self.explore(depth + 1);
    }

    fn set_variable(&mut self, variable: usize, value: bool) {
        let coefficient = self.program.objective()[variable];

        if value {
            self.selected += 1;
            self.objective += coefficient;
        } else {
            self.selected -= 1;
            self.objective -= coefficient;
        }

        self.assignment.set(variable, value);
        for (index, constraint) in self.program.constraints().iter().enumerate() {
            if constraint.is_member(variable) {
                if value {
                    self.lhs[index] += 1;
                } else {
                    self.lhs[index] -= 1;
                }
            }
        }
    }

    fn record_incumbent(&mut self) {
        // Recomputed from the assignment so drift from += / -= never leaks out.
        let objective = self.program.objective_value(&self.assignment);

        let improves = match &self.best {
            Some((_, best)) => objective > *best + EPSILON,
            None => true,
        };

        if improves {
            self.statistics.improvements += 1;
            self.best = Some((self.assignment.clone(), objective));
        }
    }
}
