use std::path::{Path, PathBuf};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lineup_optimizer::{
    TeamSelector,
    solver::selection_result::{SelectionMethod, SelectionResult},
};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    args::{ConstraintArgs, SolverArgs},
    file_utils::{read_requests, result_path},
    parsers,
    select::{read_request, write_result},
};

#[derive(Args)]
pub struct SelectDatasetArgs {
    /// A request file or a folder of request files
    #[arg(short, long)]
    dataset: PathBuf,

    /// Output folder for the .result.json files (default: next to each request)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_parser = parsers::parse_uncertainty)]
    uncertainty: Option<f64>,

    #[command(flatten)]
    solver: SolverArgs,

    #[command(flatten)]
    constraints: ConstraintArgs,
}

/// Returns the request id next to the result so that logs can name it.
fn select_file(
    path: &Path,
    args: &SelectDatasetArgs,
    selector: &TeamSelector,
) -> anyhow::Result<(Option<String>, SelectionResult)> {
    let request = read_request(path, &args.constraints, args.uncertainty)?;
    let result = selector.select_team(request.candidates, request.constraints)?;
    write_result(&result_path(path, args.output.as_deref()), &result)?;

    Ok((request.id, result))
}

pub fn run(args: SelectDatasetArgs) -> Result<(), anyhow::Error> {
    info!("Selecting dataset {:?}", args.dataset);
    let paths = if args.dataset.is_file() {
        vec![args.dataset.clone()]
    } else {
        read_requests(&args.dataset)?
    };

    let selector = TeamSelector::with_params(args.solver.params());

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} ({elapsed})")?);

    let outcomes: Vec<(&PathBuf, anyhow::Result<(Option<String>, SelectionResult)>)> = paths
        .par_iter()
        .map(|path| {
            let outcome = select_file(path, &args, &selector);
            bar.inc(1);
            (path, outcome)
        })
        .collect();

    bar.finish_and_clear();

    let mut exact = 0;
    let mut fallback = 0;
    let mut failed = 0;
    for (path, outcome) in outcomes {
        match outcome {
            Ok((id, result)) => {
                match result.method_used() {
                    SelectionMethod::Exact => exact += 1,
                    SelectionMethod::GreedyFallback => fallback += 1,
                }

                info!(
                    id = id.as_deref().unwrap_or("-"),
                    method = %result.method_used(),
                    total_score = result.total_score(),
                    complete = result.is_complete(),
                    "{:?}",
                    path
                );
            }
            Err(error) => {
                failed += 1;
                warn!("{:?}: {:#}", path, error);
            }
        }
    }

    info!(exact, fallback, failed, "Dataset finished");

    Ok(())
}
