pub mod accessor;

pub use accessor::{EnvAccessor, ProcessEnv};

use crate::core::logger::Logger;

/// Loads `.env` from the working directory into the process environment.
/// Variables already set in the environment win over the file.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => Logger::debug(&format!("Loaded environment from {}", path.display())),
        Err(_) => Logger::debug("No .env file found, using the process environment"),
    }
}
