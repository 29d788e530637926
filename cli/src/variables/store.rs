use crate::core::logger::Logger;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub type VariableMap = serde_json::Map<String, Value>;

#[derive(Debug)]
pub struct StoreError {
    pub path: String,
    pub message: String,
}

impl StoreError {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: crate::core::paths::clean_path(path),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Variable store error ({}): {}", self.path, self.message)
    }
}

impl std::error::Error for StoreError {}

/// Cross-invocation variables persisted as a flat JSON object.
///
/// The file is created as `{}` when missing and rewritten on load and on every
/// [`VariableStore::set`], so a value captured by one run is visible to the
/// next even if the process is interrupted afterwards.
#[derive(Debug)]
pub struct VariableStore {
    path: PathBuf,
    vars: VariableMap,
}

impl VariableStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| StoreError::new(&path, format!("error creating directory: {e}")))?;
        }

        if !path.exists() {
            fs::write(&path, "{}")
                .map_err(|e| StoreError::new(&path, format!("error creating file: {e}")))?;
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| StoreError::new(&path, format!("error reading file: {e}")))?;

        let vars = if raw.trim().is_empty() {
            VariableMap::new()
        } else {
            match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) => Self::quarantine(&path, "content is not a JSON object")?,
                Err(e) => Self::quarantine(&path, &e.to_string())?,
            }
        };

        let store = Self { path, vars };
        store.flush()?;
        Logger::debug(&format!(
            "Loaded {} variable(s) from {}",
            store.vars.len(),
            store.path.display()
        ));
        Ok(store)
    }

    /// Moves an unreadable store aside so the run can start from an empty one.
    fn quarantine(path: &Path, reason: &str) -> Result<VariableMap, StoreError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "variables.json".to_string());
        let backup = path.with_file_name(format!("{file_name}.corrupt"));
        fs::rename(path, &backup)
            .map_err(|e| StoreError::new(path, format!("error moving malformed file: {e}")))?;
        Logger::warn(&format!(
            "{} is malformed ({reason}); moved to {} and starting with no variables",
            crate::core::paths::clean_path(path),
            crate::core::paths::clean_path(&backup)
        ));
        Ok(VariableMap::new())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn variables(&self) -> &VariableMap {
        &self.vars
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Overwrites `key` and persists the whole store immediately.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.vars.insert(key.to_string(), value);
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(&self.vars)
            .map_err(|e| StoreError::new(&self.path, format!("error encoding variables: {e}")))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "variables.json".to_string());
        let tmp = self.path.with_file_name(format!("{file_name}.tmp"));

        fs::write(&tmp, data)
            .map_err(|e| StoreError::new(&self.path, format!("error writing file: {e}")))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::new(&self.path, format!("error writing file: {e}")))
    }
}
