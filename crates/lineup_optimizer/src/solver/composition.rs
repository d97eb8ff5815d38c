use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;
use smallvec::SmallVec;

use crate::problem::{candidate::Candidate, constraint_set::ConstraintSet};

/// Role and eligibility counts of a roster. `batters` and `bowlers` both
/// include all-rounders.
#[derive(Serialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    pub players: usize,
    pub wicketkeepers: usize,
    pub batters: usize,
    pub bowlers: usize,
    pub allrounders: usize,
    pub overseas: usize,
}

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "constraint", rename_all = "snake_case")]
pub enum ConstraintViolation {
    SquadSize { required: usize, actual: usize },
    MinWicketkeepers { required: usize, actual: usize },
    MaxWicketkeepers { allowed: usize, actual: usize },
    MinBatters { required: usize, actual: usize },
    MinBowlers { required: usize, actual: usize },
    MinAllrounders { required: usize, actual: usize },
    MaxOverseas { allowed: usize, actual: usize },
}

impl ConstraintViolation {
    /// How many players short of a lower bound, zero for upper bounds.
    pub fn deficit(&self) -> usize {
        match *self {
            ConstraintViolation::SquadSize { required, actual }
            | ConstraintViolation::MinWicketkeepers { required, actual }
            | ConstraintViolation::MinBatters { required, actual }
            | ConstraintViolation::MinBowlers { required, actual }
            | ConstraintViolation::MinAllrounders { required, actual } => {
                required.saturating_sub(actual)
            }
            ConstraintViolation::MaxWicketkeepers { .. }
            | ConstraintViolation::MaxOverseas { .. } => 0,
        }
    }

    pub fn is_upper_bound(&self) -> bool {
        matches!(
            self,
            ConstraintViolation::MaxWicketkeepers { .. } | ConstraintViolation::MaxOverseas { .. }
        )
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintViolation::SquadSize { required, actual } => {
                write!(f, "squad has {actual} players, {required} required")
            }
            ConstraintViolation::MinWicketkeepers { required, actual } => {
                write!(f, "{actual} wicketkeepers, at least {required} required")
            }
            ConstraintViolation::MaxWicketkeepers { allowed, actual } => {
                write!(f, "{actual} wicketkeepers, at most {allowed} allowed")
            }
            ConstraintViolation::MinBatters { required, actual } => {
                write!(f, "{actual} batting options, at least {required} required")
            }
            ConstraintViolation::MinBowlers { required, actual } => {
                write!(f, "{actual} bowling options, at least {required} required")
            }
            ConstraintViolation::MinAllrounders { required, actual } => {
                write!(f, "{actual} all-rounders, at least {required} required")
            }
            ConstraintViolation::MaxOverseas { allowed, actual } => {
                write!(f, "{actual} overseas players, at most {allowed} allowed")
            }
        }
    }
}

pub type Violations = SmallVec<[ConstraintViolation; 4]>;

impl Composition {
    pub fn of<'a>(roster: impl IntoIterator<Item = &'a Candidate>) -> Self {
        let mut composition = Composition::default();
        for candidate in roster {
            composition.add(candidate);
        }
        composition
    }

    pub fn add(&mut self, candidate: &Candidate) {
        self.apply(candidate, true);
    }

    pub fn remove(&mut self, candidate: &Candidate) {
        self.apply(candidate, false);
    }

    fn apply(&mut self, candidate: &Candidate, add: bool) {
        let role = candidate.role();
        let flags = [
            (&mut self.players, true),
            (&mut self.wicketkeepers, role.is_wicketkeeper()),
            (&mut self.batters, role.counts_as_batter()),
            (&mut self.bowlers, role.counts_as_bowler()),
            (&mut self.allrounders, role.is_allrounder()),
            (&mut self.overseas, candidate.is_overseas()),
        ];

        for (count, applies) in flags {
            if applies {
                if add {
                    *count += 1;
                } else {
                    *count -= 1;
                }
            }
        }
    }

    /// Lower bounds only, including the squad size.
    pub fn lower_bound_violations(&self, constraints: &ConstraintSet) -> Violations {
        let mut violations = Violations::new();

        if self.players < constraints.squad_size {
            violations.push(ConstraintViolation::SquadSize {
                required: constraints.squad_size,
                actual: self.players,
            });
        }

        if self.wicketkeepers < constraints.min_wicketkeepers {
            violations.push(ConstraintViolation::MinWicketkeepers {
                required: constraints.min_wicketkeepers,
                actual: self.wicketkeepers,
            });
        }

        if self.allrounders < constraints.min_allrounders {
            violations.push(ConstraintViolation::MinAllrounders {
                required: constraints.min_allrounders,
                actual: self.allrounders,
            });
        }

        if self.batters < constraints.min_batters {
            violations.push(ConstraintViolation::MinBatters {
                required: constraints.min_batters,
                actual: self.batters,
            });
        }

        if self.bowlers < constraints.min_bowlers {
            violations.push(ConstraintViolation::MinBowlers {
                required: constraints.min_bowlers,
                actual: self.bowlers,
            });
        }

        violations
    }

    pub fn upper_bound_violations(&self, constraints: &ConstraintSet) -> Violations {
        let mut violations = Violations::new();

        if self.players > constraints.squad_size {
            violations.push(ConstraintViolation::SquadSize {
                required: constraints.squad_size,
                actual: self.players,
            });
        }

        if !constraints.allows_wicketkeepers(self.wicketkeepers)
            && let Some(allowed) = constraints.max_wicketkeepers
        {
            violations.push(ConstraintViolation::MaxWicketkeepers {
                allowed,
                actual: self.wicketkeepers,
            });
        }

        if !constraints.allows_overseas(self.overseas) {
            violations.push(ConstraintViolation::MaxOverseas {
                allowed: constraints.max_overseas,
                actual: self.overseas,
            });
        }

        violations
    }

    /// Every bound the roster breaks. Empty means all constraints are met.
    pub fn violations(&self, constraints: &ConstraintSet) -> Violations {
        let mut violations = self.lower_bound_violations(constraints);
        violations.extend(self.upper_bound_violations(constraints));
        violations
    }

    pub fn satisfies(&self, constraints: &ConstraintSet) -> bool {
        self.violations(constraints).is_empty()
    }

    pub fn respects_upper_bounds(&self, constraints: &ConstraintSet) -> bool {
        self.upper_bound_violations(constraints).is_empty()
    }

    /// Sum of the shortfalls against every lower bound except squad size.
    pub fn role_deficit(&self, constraints: &ConstraintSet) -> usize {
        self.lower_bound_violations(constraints)
            .iter()
            .filter(|violation| !matches!(violation, ConstraintViolation::SquadSize { .. }))
            .map(ConstraintViolation::deficit)
            .sum()
    }
}
