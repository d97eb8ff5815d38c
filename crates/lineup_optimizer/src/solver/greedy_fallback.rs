use std::mem::discriminant;

use fixedbitset::FixedBitSet;
use tracing::{Level, debug, instrument};

use crate::problem::{candidate::CandidateIdx, role::Role, selection_problem::SelectionProblem};

use super::composition::{Composition, ConstraintViolation, Violations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repair {
    Add(CandidateIdx),
    Swap {
        outgoing: CandidateIdx,
        incoming: CandidateIdx,
    },
}

/// Best-effort roster used when the exact search gives no answer.
///
/// Candidates are admitted in ranking order while upper bounds allow it.
/// Unmet minimums are then repaired one step at a time: the best unadmitted
/// candidate of the missing role either fills an empty slot or replaces the
/// weakest admitted player whose departure keeps every satisfied bound
/// satisfied. Each step strictly lowers the total shortfall, so the repair
/// loop ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyFallback;

impl GreedyFallback {
    /// Returns the admitted candidates in ranking order.
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn select(&self, problem: &SelectionProblem) -> Vec<CandidateIdx> {
        let constraints = problem.constraints();
        let mut admitted = FixedBitSet::with_capacity(problem.len());
        let mut composition = Composition::default();

        for (index, candidate) in problem.candidates_iter() {
            if composition.players >= constraints.squad_size {
                break;
            }

            composition.add(candidate);
            if composition.respects_upper_bounds(constraints) {
                admitted.insert(index.get());
            } else {
                composition.remove(candidate);
            }
        }

        let mut repairs = 0;
        while composition.role_deficit(constraints) > 0 {
            let Some(repair) = self.find_repair(problem, &admitted, &composition) else {
                break;
            };

            match repair {
                Repair::Add(incoming) => {
                    admitted.insert(incoming.get());
                    composition.add(problem.candidate(incoming));
                }
                Repair::Swap { outgoing, incoming } => {
                    admitted.set(outgoing.get(), false);
                    composition.remove(problem.candidate(outgoing));
                    admitted.insert(incoming.get());
                    composition.add(problem.candidate(incoming));
                }
            }

            debug!(?repair, "Greedy repair applied");
            repairs += 1;
        }

        debug!(
            players = composition.players,
            repairs,
            deficit = composition.role_deficit(constraints),
            "Greedy selection finished"
        );

        admitted.ones().map(CandidateIdx::new).collect()
    }

    fn find_repair(
        &self,
        problem: &SelectionProblem,
        admitted: &FixedBitSet,
        composition: &Composition,
    ) -> Option<Repair> {
        let constraints = problem.constraints();
        let deficit = composition.role_deficit(constraints);
        let current_violations = composition.lower_bound_violations(constraints);

        // Weakest first.
        let mut removable: Vec<CandidateIdx> = admitted.ones().map(CandidateIdx::new).collect();
        removable.reverse();

        let improves = |next: &Composition| {
            next.respects_upper_bounds(constraints)
                && next.role_deficit(constraints) < deficit
                && !breaks_satisfied_bound(&current_violations, next, problem)
        };

        for violation in &current_violations {
            let Some(fills) = role_filter(violation) else {
                continue;
            };

            for (incoming, entrant) in problem.candidates_iter() {
                if admitted.contains(incoming.get()) || !fills(&entrant.role()) {
                    continue;
                }

                if composition.players < constraints.squad_size {
                    let mut next = *composition;
                    next.add(entrant);
                    if improves(&next) {
                        return Some(Repair::Add(incoming));
                    }
                }

                for &outgoing in &removable {
                    let mut next = *composition;
                    next.remove(problem.candidate(outgoing));
                    next.add(entrant);

                    if improves(&next) {
                        return Some(Repair::Swap { outgoing, incoming });
                    }
                }
            }
        }

        None
    }
}

fn role_filter(violation: &ConstraintViolation) -> Option<fn(&Role) -> bool> {
    let fills: fn(&Role) -> bool = match violation {
        ConstraintViolation::MinWicketkeepers { .. } => Role::is_wicketkeeper,
        ConstraintViolation::MinAllrounders { .. } => Role::is_allrounder,
        ConstraintViolation::MinBatters { .. } => Role::counts_as_batter,
        ConstraintViolation::MinBowlers { .. } => Role::counts_as_bowler,
        _ => return None,
    };

    Some(fills)
}

fn breaks_satisfied_bound(
    before: &Violations,
    after: &Composition,
    problem: &SelectionProblem,
) -> bool {
    after
        .lower_bound_violations(problem.constraints())
        .iter()
        .any(|violation| {
            !before
                .iter()
                .any(|previous| discriminant(previous) == discriminant(violation))
        })
}
