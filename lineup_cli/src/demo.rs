use clap::Args;
use lineup_optimizer::{
    TeamSelector,
    json::types::JsonConstraintSet,
    problem::{
        candidate::{Candidate, CandidateBuilder},
        confidence_interval::{ConfidenceInterval, DEFAULT_UNCERTAINTY},
        constraint_set::ConstraintSet,
        role::Role,
    },
};
use tracing::info;

use crate::{
    args::{ConstraintArgs, SolverArgs},
    display,
};

#[derive(Args)]
pub struct DemoArgs {
    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    solver: SolverArgs,

    #[command(flatten)]
    constraints: ConstraintArgs,
}

const DEMO_SQUAD: [(&str, f64, Role); 13] = [
    ("RG Sharma", 78.0, Role::Batter),
    ("S Dhawan", 65.0, Role::Batter),
    ("V Kohli", 91.0, Role::Batter),
    ("SK Raina", 72.0, Role::AllRounder),
    ("MS Dhoni", 80.0, Role::Wicketkeeper),
    ("HH Pandya", 74.0, Role::AllRounder),
    ("RA Jadeja", 69.0, Role::AllRounder),
    ("R Ashwin", 58.0, Role::Bowler),
    ("B Kumar", 61.0, Role::Bowler),
    ("JJ Bumrah", 85.0, Role::Bowler),
    ("Yuzvendra Chahal", 55.0, Role::Bowler),
    ("KL Rahul", 70.0, Role::Wicketkeeper),
    ("SN Thakur", 50.0, Role::AllRounder),
];

pub fn demo_squad() -> Vec<Candidate> {
    DEMO_SQUAD
        .iter()
        .map(|&(id, score, role)| {
            let mut builder = CandidateBuilder::new(id, score, role);
            builder.set_confidence(ConfidenceInterval::from_uncertainty(
                score,
                DEFAULT_UNCERTAINTY,
            ));
            builder.build()
        })
        .collect()
}

pub fn run(args: DemoArgs) -> anyhow::Result<()> {
    let defaults = ConstraintSet::default();
    let mut constraints = JsonConstraintSet::from(&defaults);
    args.constraints.apply(&mut constraints);
    let constraints = constraints.build_constraints(&defaults)?;

    let squad = demo_squad();
    info!(candidates = squad.len(), "Selecting from the demo squad");

    let selector = TeamSelector::with_params(args.solver.params());
    let result = selector.select_team(squad, constraints)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::print_result(&result);
    }

    Ok(())
}
