use crate::commands::shared::GlobalArgs;
use crate::core::formatter::OutputFormat;

/// Only the store is opened, so this works without a catalogue.
pub fn execute(args: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = args.open_store()?;
    let variables = store.variables();

    let formatter = crate::core::formatter::get_formatter(&args.output);
    if variables.is_empty() && args.output == OutputFormat::Text {
        println!(
            "No variables stored in {}",
            crate::core::paths::clean_path(store.path())
        );
        return Ok(());
    }
    print!("{}", formatter.format(variables));

    Ok(())
}
