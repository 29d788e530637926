use crate::core::error::KoiError;

/// Exit codes for the koi CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Invalid or unreadable koi.config.yaml
    ConfigError = 3,
    /// File not found, IO or variable store error
    FileError = 4,
    /// Endpoint not found in the catalogue
    NotFoundError = 5,
    /// Network or HTTP error
    NetworkError = 6,
    /// Parameter resolution error
    ParameterError = 8,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&KoiError> for ExitCode {
    fn from(error: &KoiError) -> Self {
        match error {
            KoiError::Io(_) => ExitCode::FileError,
            KoiError::Config(_) => ExitCode::ConfigError,
            KoiError::ConfigNotFound(_) => ExitCode::ConfigError,
            KoiError::Parameter(_) => ExitCode::ParameterError,
            KoiError::Store(_) => ExitCode::FileError,
            KoiError::Call { .. } => ExitCode::NetworkError,
            KoiError::EndpointNotFound(_) => ExitCode::NotFoundError,
            KoiError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(koi_error) = error.downcast_ref::<KoiError>() {
            ExitCode::from(koi_error)
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
