use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

pub const DEFAULT_SQUAD_SIZE: usize = 11;

/// Composition rules a selected roster has to satisfy.
///
/// Batting and bowling minimums both count all-rounders, so a single
/// all-rounder can help satisfy the two bounds at once.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    pub squad_size: usize,
    pub min_wicketkeepers: usize,
    /// `None` leaves the number of keepers unbounded.
    pub max_wicketkeepers: Option<usize>,
    pub min_batters: usize,
    pub min_bowlers: usize,
    pub min_allrounders: usize,
    pub max_overseas: usize,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        ConstraintSet {
            squad_size: DEFAULT_SQUAD_SIZE,
            min_wicketkeepers: 1,
            max_wicketkeepers: None,
            min_batters: 5,
            min_bowlers: 4,
            min_allrounders: 2,
            max_overseas: 4,
        }
    }
}

impl ConstraintSet {
    /// Constraints with every minimum at zero and no upper bounds.
    pub fn unconstrained(squad_size: usize) -> Self {
        ConstraintSet {
            squad_size,
            min_wicketkeepers: 0,
            max_wicketkeepers: None,
            min_batters: 0,
            min_bowlers: 0,
            min_allrounders: 0,
            max_overseas: usize::MAX,
        }
    }

    /// Smallest roster that can satisfy every lower bound at once. Saturates
    /// at `usize::MAX`, which no squad size can reach.
    pub fn minimum_required_players(&self) -> usize {
        let allrounders = self
            .min_allrounders
            .max(self.min_batters.min(self.min_bowlers));

        self.min_wicketkeepers
            .saturating_add(allrounders)
            .saturating_add(self.min_batters.saturating_sub(allrounders))
            .saturating_add(self.min_bowlers.saturating_sub(allrounders))
    }

    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.squad_size == 0 {
            return Err(SelectionError::NonPositiveSquadSize(0));
        }

        if let Some(max_wicketkeepers) = self.max_wicketkeepers
            && self.min_wicketkeepers > max_wicketkeepers
        {
            return Err(SelectionError::WicketkeeperBounds {
                min: self.min_wicketkeepers,
                max: max_wicketkeepers,
            });
        }

        let required = self.minimum_required_players();
        if required > self.squad_size {
            return Err(SelectionError::ContradictoryConstraints {
                required,
                squad_size: self.squad_size,
            });
        }

        Ok(())
    }

    pub fn allows_overseas(&self, count: usize) -> bool {
        count <= self.max_overseas
    }

    pub fn allows_wicketkeepers(&self, count: usize) -> bool {
        self.max_wicketkeepers.is_none_or(|max| count <= max)
    }
}
