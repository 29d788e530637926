use clap::{CommandFactory, Parser};

mod client;
mod commands;
mod config;
mod core;
mod environment;
mod generators;
mod params;
mod variables;

use commands::shared::GlobalArgs;
use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "koi")]
#[command(
    about = "Call the HTTP endpoints declared in koi.config.yaml. Run 'koi <endpoint> --param value' to invoke one."
)]
#[command(version = crate::core::version::app_version())]
#[command(disable_help_subcommand = true)]
struct Args {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.global.debug);
    environment::load_dotenv();

    match args.command {
        Some(Commands::List) => commands::list::execute(&args.global),
        Some(Commands::Help(help_args)) => commands::help::execute(&args.global, &help_args),
        Some(Commands::Vars) => commands::vars::execute(&args.global),
        Some(Commands::Endpoint(raw)) => commands::run::execute(&args.global, &raw).await,
        None => {
            if !args.global.config_path().is_file() {
                Args::command().print_help()?;
                println!();
                return Ok(());
            }
            commands::help::execute_overview(&args.global)
        }
    }
}
