use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::Args;
use lineup_optimizer::{
    TeamSelector,
    json::types::JsonSelectionRequest,
    problem::constraint_set::ConstraintSet,
    solver::{selection_result::SelectionResult, team_selector::SelectionRequest},
};
use tracing::info;

use crate::{
    args::{ConstraintArgs, SolverArgs},
    display, parsers,
};

#[derive(Args)]
pub struct SelectArgs {
    /// The request file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Where to write the result as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Fills in confidence intervals for candidates without one (e.g., 0.15)
    #[arg(long, value_parser = parsers::parse_uncertainty)]
    uncertainty: Option<f64>,

    #[command(flatten)]
    solver: SolverArgs,

    #[command(flatten)]
    constraints: ConstraintArgs,
}

pub fn read_request(
    path: &Path,
    overrides: &ConstraintArgs,
    uncertainty: Option<f64>,
) -> anyhow::Result<SelectionRequest> {
    let f = File::open(path)?;
    let mut content: JsonSelectionRequest = serde_json::from_reader(BufReader::new(f))?;
    overrides.apply(&mut content.constraints);

    Ok(content.build_request(&ConstraintSet::default(), uncertainty)?)
}

pub fn write_result(path: &Path, result: &SelectionResult) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, serde_json::to_string_pretty(result)?)?;
    Ok(())
}

pub fn run(args: SelectArgs) -> anyhow::Result<()> {
    let request = read_request(&args.input, &args.constraints, args.uncertainty)?;
    info!(
        id = request.id.as_deref().unwrap_or("-"),
        candidates = request.candidates.len(),
        squad_size = request.constraints.squad_size,
        "Selecting from {:?}",
        args.input
    );

    let selector = TeamSelector::with_params(args.solver.params());
    let result = selector.select_team(request.candidates, request.constraints)?;

    display::print_result(&result);

    if let Some(out) = args.out {
        write_result(&out, &result)?;
        info!("Result written to {:?}", out);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lineup_optimizer::{SelectionError, problem::role::Role};

    use super::*;

    const REQUEST: &str = r#"{
        "id": "final",
        "candidates": [
            { "id": "V Kohli", "predicted_score": 91.0, "role": "BAT" },
            { "id": "MS Dhoni", "predicted_score": 80.0, "role": "WK" },
            { "id": "JJ Bumrah", "predicted_score": 85.0, "role": "BOWL", "is_overseas": true }
        ],
        "constraints": { "squad_size": 3, "min_batters": 1, "min_bowlers": 1, "min_allrounders": 0 }
    }"#;

    #[test]
    fn test_read_request_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final.json");
        fs::write(&path, REQUEST).unwrap();

        let overrides = ConstraintArgs {
            squad_size: Some(2),
            min_bowlers: Some(0),
            max_overseas: Some(0),
            ..Default::default()
        };
        let request = read_request(&path, &overrides, Some(0.1)).unwrap();

        assert_eq!(request.id.as_deref(), Some("final"));
        assert_eq!(request.candidates.len(), 3);
        assert_eq!(request.candidates[1].role(), Role::Wicketkeeper);
        assert!(request.candidates[0].confidence().is_some());

        // File values stay unless overridden; missing ones take the defaults.
        assert_eq!(request.constraints.squad_size, 2);
        assert_eq!(request.constraints.min_batters, 1);
        assert_eq!(request.constraints.min_bowlers, 0);
        assert_eq!(request.constraints.min_wicketkeepers, 1);
        assert_eq!(request.constraints.max_overseas, 0);

        let result = TeamSelector::default()
            .select_team(request.candidates, request.constraints)
            .unwrap();
        assert_eq!(result.selected_ids(), vec!["V Kohli", "MS Dhoni"]);
        assert!(result.is_complete());
    }

    #[test]
    fn test_read_request_rejects_negative_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final.json");
        fs::write(&path, REQUEST).unwrap();

        let overrides = ConstraintArgs {
            min_bowlers: Some(-1),
            ..Default::default()
        };
        let error = read_request(&path, &overrides, None).unwrap_err();

        assert_eq!(
            error.downcast_ref::<SelectionError>(),
            Some(&SelectionError::NegativeBound {
                name: "min_bowlers",
                value: -1
            })
        );
    }

    #[test]
    fn test_write_result_creates_parent_folders() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("final.json");
        fs::write(&request_path, REQUEST).unwrap();

        let request = read_request(&request_path, &ConstraintArgs::default(), None).unwrap();
        let result = TeamSelector::default()
            .select_team(request.candidates, request.constraints)
            .unwrap();

        let out = dir.path().join("results/final.result.json");
        write_result(&out, &result).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["method_used"], "EXACT");
        assert_eq!(written["selected"].as_array().unwrap().len(), 3);
    }
}
