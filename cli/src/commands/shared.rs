use crate::client::{KoiClient, RunOptions};
use crate::core::error::KoiError;
use crate::core::formatter::OutputFormat;
use crate::core::paths::CONFIG_FILE_NAME;
use crate::environment::ProcessEnv;
use crate::variables::VariableStore;
use clap::Args;
use std::path::{Path, PathBuf};

/// Options accepted before any command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    pub debug: bool,

    #[arg(
        short = 'c',
        long = "config",
        env = "KOI_CONFIG",
        default_value = CONFIG_FILE_NAME,
        help = "Path to the endpoint catalogue",
        global = true
    )]
    pub config: String,

    #[arg(
        long = "variables-file",
        env = "KOI_VARIABLES_FILE",
        value_name = "PATH",
        help = "Variable store location [default: ~/.koi/variables.json]",
        global = true
    )]
    pub variables_file: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true,
        global = true
    )]
    pub output: OutputFormat,
}

impl GlobalArgs {
    pub fn config_path(&self) -> &Path {
        Path::new(&self.config)
    }

    pub fn variables_path(&self) -> Result<PathBuf, KoiError> {
        match &self.variables_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => crate::core::paths::default_variables_path().ok_or_else(|| {
                KoiError::Generic(
                    "could not determine the home directory, use --variables-file".to_string(),
                )
            }),
        }
    }

    pub fn open_store(&self) -> Result<VariableStore, KoiError> {
        Ok(VariableStore::load(self.variables_path()?)?)
    }

    pub fn open_client(&self, options: RunOptions) -> Result<KoiClient, KoiError> {
        KoiClient::open(
            self.config_path(),
            &self.variables_path()?,
            Box::new(ProcessEnv),
            options,
        )
    }
}
