use crate::demo::{run_demo, run_lead_score, run_portal_state, DemoArgs, LeadScoreArgs, PortalStateArgs};
use crate::server;
use agency_portal::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Agency Portal",
    about = "Score prospects and resolve client dashboards from the command line or over HTTP",
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
    /// Prospect lead scoring
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
    /// Client portal dashboard resolution
    Portal {
        #[command(subcommand)]
        command: PortalCommand,
    },
    /// Score sample prospects and resolve sample client dashboards
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Score a single prospect from command-line attributes
    Score(LeadScoreArgs),
}

#[derive(Subcommand, Debug)]
enum PortalCommand {
    /// Resolve the dashboard state for a client snapshot JSON file
    State(PortalStateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leads {
            command: LeadsCommand::Score(args),
        } => run_lead_score(args),
        Command::Portal {
            command: PortalCommand::State(args),
        } => run_portal_state(args),
        Command::Demo(args) => run_demo(args),
    }
}
