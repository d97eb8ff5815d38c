use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[serde(alias = "BAT")]
    Batter,
    #[serde(alias = "BOWL")]
    Bowler,
    #[serde(alias = "ALL", alias = "ALLROUNDER")]
    AllRounder,
    #[serde(alias = "WK")]
    Wicketkeeper,
}

impl Role {
    pub const VARIANTS: [Role; 4] = [
        Role::Batter,
        Role::Bowler,
        Role::AllRounder,
        Role::Wicketkeeper,
    ];

    /// All-rounders count toward the batting minimum as well as the bowling one.
    pub fn counts_as_batter(&self) -> bool {
        matches!(self, Role::Batter | Role::AllRounder)
    }

    pub fn counts_as_bowler(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }

    pub fn is_wicketkeeper(&self) -> bool {
        matches!(self, Role::Wicketkeeper)
    }

    pub fn is_allrounder(&self) -> bool {
        matches!(self, Role::AllRounder)
    }

    /// Position of the role in a printed lineup: keeper first, bowlers last.
    pub fn display_order(&self) -> u8 {
        match self {
            Role::Wicketkeeper => 0,
            Role::Batter => 1,
            Role::AllRounder => 2,
            Role::Bowler => 3,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Role::Batter => "BAT",
            Role::Bowler => "BOWL",
            Role::AllRounder => "ALL",
            Role::Wicketkeeper => "WK",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
