pub mod candidate;
pub mod confidence_interval;
pub mod constraint_set;
pub mod role;
pub mod selection_problem;
