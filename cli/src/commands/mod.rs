pub mod help;
pub mod list;
pub mod run;
pub mod shared;
pub mod vars;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List endpoints")]
    List,
    #[command(about = "Show the API overview or the parameters of an endpoint")]
    Help(help::HelpArgs),
    #[command(about = "Show stored variables")]
    Vars,
    /// `koi <endpoint> [--param value ...]`
    #[command(external_subcommand)]
    Endpoint(Vec<String>),
}
