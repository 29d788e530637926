use crate::client::RunOptions;
use crate::commands::shared::GlobalArgs;

pub fn execute(args: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = args.open_client(RunOptions::default())?;
    let endpoints = client.list_endpoints();

    let formatter = crate::core::formatter::get_formatter(&args.output);
    print!(
        "{}",
        formatter.format_list(&endpoints, "Endpoints:", "No endpoints defined")
    );

    Ok(())
}
