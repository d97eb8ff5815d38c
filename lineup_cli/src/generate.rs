use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of a selection request
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// JSON schema of a selection result
    ResultSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    let (schema, out) = match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            (lineup_optimizer::json::schema::generate_json_schema()?, out)
        }
        GenerateSubcommands::ResultSchema { out } => (
            lineup_optimizer::json::schema::generate_result_json_schema()?,
            out,
        ),
    };

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, schema)?;

    Ok(())
}
