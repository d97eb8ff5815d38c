use jiff::SignedDuration;

/// Limits on the exact search. When one fires before optimality is proven,
/// the selection falls back to the greedy roster.
#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    Duration(SignedDuration),
    Nodes(usize),
}

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub terminations: Vec<Termination>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            terminations: vec![Termination::Duration(SignedDuration::from_secs(5))],
        }
    }
}

impl SolverParams {
    pub fn unlimited() -> Self {
        Self {
            terminations: Vec::new(),
        }
    }

    pub fn max_nodes(&self) -> Option<usize> {
        self.terminations
            .iter()
            .filter_map(|termination| match termination {
                Termination::Nodes(nodes) => Some(*nodes),
                _ => None,
            })
            .min()
    }

    pub fn max_duration(&self) -> Option<SignedDuration> {
        self.terminations
            .iter()
            .filter_map(|termination| match termination {
                Termination::Duration(duration) => Some(*duration),
                _ => None,
            })
            .min()
    }
}
