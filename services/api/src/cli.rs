use crate::lookup::{run_list, run_show, ListArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use event_lodging::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Event Lodging",
    about = "Serve and query hotel access for enrolled event attendees",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the hotel access checks for a user from the command line
    Lodging {
        #[command(subcommand)]
        command: LodgingCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LodgingCommand {
    /// List every hotel the user may see
    List(ListArgs),
    /// Show a single hotel by id
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override LODGING_SEED_PATH with a JSON seed file
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lodging {
            command: LodgingCommand::List(args),
        } => run_list(args).await,
        Command::Lodging {
            command: LodgingCommand::Show(args),
        } => run_show(args).await,
    }
}
