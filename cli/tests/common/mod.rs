#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn koi_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_koi"));
    cmd.env_remove("KOI_CONFIG").env_remove("KOI_VARIABLES_FILE");
    cmd
}

/// A scratch directory holding a catalogue and a variable store, so runs never
/// touch the real `~/.koi`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("koi.config.yaml")
    }

    pub fn variables_path(&self) -> PathBuf {
        self.dir.path().join("variables.json")
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.config_path(), yaml).expect("Failed to write config");
    }

    pub fn seed_variables(&self, vars: &Value) {
        fs::write(
            self.variables_path(),
            serde_json::to_string_pretty(vars).unwrap(),
        )
        .expect("Failed to write variables");
    }

    pub fn read_variables(&self) -> Value {
        let raw = fs::read_to_string(self.variables_path()).expect("Failed to read variables");
        serde_json::from_str(&raw).expect("variables.json is not JSON")
    }

    /// `koi` pointed at this workspace's catalogue and store.
    pub fn koi(&self) -> Command {
        let mut cmd = koi_cmd();
        cmd.current_dir(self.path())
            .arg("--config")
            .arg(self.config_path())
            .arg("--variables-file")
            .arg(self.variables_path());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.koi()
            .args(args)
            .output()
            .expect("Failed to execute koi")
    }
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => {
            for (k, v) in exp_map {
                if let Some(act_v) = act_map.get(k) {
                    if !json_subset(v, act_v) {
                        return false;
                    }
                } else {
                    return false; // Key missing in actual
                }
            }
            true
        }
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            if exp_arr.len() != act_arr.len() {
                return false;
            }
            for (e, a) in exp_arr.iter().zip(act_arr.iter()) {
                if !json_subset(e, a) {
                    return false;
                }
            }
            true
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            if let Ok(re) = regex::Regex::new(pattern) {
                re.is_match(a)
            } else {
                false
            }
        }
        _ => expected == actual,
    }
}

pub fn validate_json_output(stdout: &str, expected: &Value) -> Result<(), String> {
    let actual: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse actual JSON output: {e}\n{stdout}"))?;

    if !json_subset(expected, &actual) {
        return Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(expected).unwrap(),
            serde_json::to_string_pretty(&actual).unwrap()
        ));
    }

    Ok(())
}
