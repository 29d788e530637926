#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub file_path: Option<String>,
    pub issues: Vec<String>,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            file_path: None,
            issues: Vec::new(),
        }
    }

    pub fn at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            location: Some((line, column)),
            ..Self::new(message)
        }
    }

    pub fn invalid(issues: Vec<String>) -> Self {
        Self {
            issues,
            ..Self::new("invalid configuration")
        }
    }

    pub fn with_file(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        match err.location() {
            Some(loc) => ConfigError::at(err.to_string(), loc.line(), loc.column()),
            None => ConfigError::new(err.to_string()),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = self
            .file_path
            .as_deref()
            .map(crate::core::paths::clean_path_str)
            .unwrap_or(crate::core::paths::CONFIG_FILE_NAME);

        if !self.issues.is_empty() {
            write!(f, "Invalid {file}:")?;
            for issue in &self.issues {
                write!(f, "\n  - {issue}")?;
            }
            return Ok(());
        }

        match self.location {
            Some((line, column)) => write!(
                f,
                "Config error in {file} at line {line}, column {column}: {}",
                self.message
            ),
            None => write!(f, "Config error in {file}: {}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}
