pub mod binary_program;
pub mod branch_and_bound;
pub mod composition;
pub mod exact_solver;
pub mod greedy_fallback;
pub mod selection_result;
pub mod solver_params;
pub mod team_selector;
