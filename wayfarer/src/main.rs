use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::route::RouteArgs;

mod grid;
mod profiles;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the weighting profiles
    Profiles,
    /// Search a path across a generated road grid
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
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
        Some(Commands::Profiles) => profiles::run(),
        Some(Commands::Route { args }) => route::run(args)?,
        None => {
            // Handle no command provided
        }
    }

    Ok(())
}
