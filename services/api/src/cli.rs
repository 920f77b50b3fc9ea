use clap::{Args, Parser, Subcommand};
use strainlens::error::AppError;

use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Lifestyle Strain Assessment",
    about = "Serve and exercise the lifestyle strain scoring engine from the command line",
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
    /// Score an answer set from a JSON file or an encoded token
    Score(ScoreArgs),
    /// Run a scripted assessment demo with a synthetic answer set
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
