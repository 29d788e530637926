use crate::client::http::HttpError;
use crate::config::error::ConfigError;
use crate::params::resolve::ResolveError;
use crate::variables::store::StoreError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum KoiError {
    Io(io::Error),
    Config(ConfigError),
    ConfigNotFound(String),
    Parameter(ResolveError),
    Store(StoreError),
    Call {
        endpoint: String,
        path: String,
        source: HttpError,
    },
    EndpointNotFound(String),
    Generic(String),
}

impl fmt::Display for KoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KoiError::Io(err) => write!(f, "IO error: {err}"),
            KoiError::Config(err) => write!(f, "{err}"),
            KoiError::ConfigNotFound(path) => write!(
                f,
                "Configuration file not found: {}",
                crate::core::paths::clean_path_str(path)
            ),
            KoiError::Parameter(err) => write!(f, "{err}"),
            KoiError::Store(err) => write!(f, "{err}"),
            KoiError::Call {
                endpoint,
                path,
                source,
            } => write!(f, "error while calling {endpoint} endpoint {path}: {source}"),
            KoiError::EndpointNotFound(name) => write!(f, "no endpoints found for {name}"),
            KoiError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for KoiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KoiError::Io(err) => Some(err),
            KoiError::Config(err) => Some(err),
            KoiError::Parameter(err) => Some(err),
            KoiError::Store(err) => Some(err),
            KoiError::Call { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for KoiError {
    fn from(err: io::Error) -> Self {
        KoiError::Io(err)
    }
}

impl From<ConfigError> for KoiError {
    fn from(err: ConfigError) -> Self {
        KoiError::Config(err)
    }
}

impl From<ResolveError> for KoiError {
    fn from(err: ResolveError) -> Self {
        KoiError::Parameter(err)
    }
}

impl From<StoreError> for KoiError {
    fn from(err: StoreError) -> Self {
        KoiError::Store(err)
    }
}

impl From<String> for KoiError {
    fn from(msg: String) -> Self {
        KoiError::Generic(msg)
    }
}

impl From<&str> for KoiError {
    fn from(msg: &str) -> Self {
        KoiError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_error_carries_endpoint_context() {
        let err = KoiError::Call {
            endpoint: "login".to_string(),
            path: "/auth/login".to_string(),
            source: HttpError {
                message: "connection refused".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "error while calling login endpoint /auth/login: HTTP Error: connection refused"
        );
    }

    #[test]
    fn test_endpoint_not_found_message() {
        let err = KoiError::EndpointNotFound("nope".to_string());
        assert_eq!(err.to_string(), "no endpoints found for nope");
    }
}
