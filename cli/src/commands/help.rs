use crate::client::RunOptions;
use crate::commands::shared::GlobalArgs;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct HelpArgs {
    #[arg(help = "Endpoint to describe")]
    pub endpoint: Option<String>,
}

pub fn execute(args: &GlobalArgs, help: &HelpArgs) -> Result<(), Box<dyn std::error::Error>> {
    match &help.endpoint {
        Some(name) => execute_endpoint(args, name),
        None => execute_overview(args),
    }
}

pub fn execute_overview(args: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = args.open_client(RunOptions::default())?;
    let overview = client.overview();

    let formatter = crate::core::formatter::get_formatter(&args.output);
    print!("{}", formatter.format(&overview));
    if args.output == OutputFormat::Text {
        println!();
        println!("Usage: koi <endpoint> [--param value ...]");
        println!("Run 'koi help <endpoint>' to see its parameters.");
    }

    Ok(())
}

fn execute_endpoint(args: &GlobalArgs, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = args.open_client(RunOptions::default())?;
    let details = client.endpoint_details(name)?;

    let formatter = crate::core::formatter::get_formatter(&args.output);
    print!("{}", formatter.format(&details));

    Ok(())
}
