pub mod error;
pub mod json;
pub mod problem;
pub mod solver;

pub use error::SelectionError;
pub use solver::team_selector::{TeamSelector, select_team};

#[cfg(test)]
pub(crate) mod test_utils;
