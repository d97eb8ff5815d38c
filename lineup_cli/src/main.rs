use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    demo::DemoArgs, generate::GenerateSubcommands, select::SelectArgs,
    select_dataset::SelectDatasetArgs,
};

mod args;
mod demo;
mod display;
mod file_utils;
mod generate;
mod parsers;
mod select;
mod select_dataset;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the best XI for one request file
    Select {
        #[command(flatten)]
        args: SelectArgs,
    },
    /// Select every request of a folder in parallel
    SelectDataset {
        #[command(flatten)]
        args: SelectDatasetArgs,
    },
    /// Run the selection on a built-in squad
    Demo {
        #[command(flatten)]
        args: DemoArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Select { args } => select::run(args)?,
        Commands::SelectDataset { args } => select_dataset::run(args)?,
        Commands::Demo { args } => demo::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
