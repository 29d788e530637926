use super::error::ConfigError;
use super::mode::Mode;
use super::model::{Config, Placement};
use super::template::apply_variables;
use crate::core::error::KoiError;
use crate::core::logger::Logger;
use crate::variables::store::VariableMap;
use std::fs;
use std::path::Path;

/// Reads, templates, parses and validates the endpoint catalogue.
pub fn load_config(path: &Path, variables: &VariableMap) -> Result<Config, KoiError> {
    if !path.is_file() {
        return Err(KoiError::ConfigNotFound(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    let file = crate::core::paths::clean_path(path);
    let config = parse_config(&raw, variables).map_err(|e| e.with_file(file.clone()))?;
    validate(&config).map_err(|e| e.with_file(file))?;

    Logger::debug(&format!(
        "Loaded {} endpoint(s) from {}",
        config.endpoints.len(),
        path.display()
    ));
    Ok(config)
}

pub fn parse_config(raw: &str, variables: &VariableMap) -> Result<Config, ConfigError> {
    let templated = apply_variables(raw, variables);
    Ok(serde_yaml::from_str(&templated)?)
}

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let mut issues = Vec::new();

    if config.api.base_url.trim().is_empty() {
        issues.push("api.baseUrl: is required".to_string());
    }

    for (name, endpoint) in &config.endpoints {
        if endpoint.path.trim().is_empty() {
            issues.push(format!("endpoints.{name}.path: is required"));
        }

        for (key, param) in &endpoint.parameters {
            let field = format!("endpoints.{name}.parameters.{key}");

            match Mode::parse(&param.mode) {
                Ok(Some(Mode::Faker(generator))) => {
                    match crate::generators::get_generator(&generator) {
                        Some(g) => {
                            if let Err(e) = g.validate_rules(&param.rules) {
                                issues.push(format!("{field}.rules: {e}"));
                            }
                        }
                        None => Logger::debug(&format!(
                            "{field}: unknown generator '{generator}' (known: {}), the default will be used",
                            crate::generators::generator_keys().join(", ")
                        )),
                    }
                }
                Ok(_) => {}
                Err(e) => issues.push(format!("{field}.mode: {e}")),
            }

            if param.placement_for(endpoint.method) == Placement::Path
                && !endpoint.path.contains(&format!("{{{key}}}"))
            {
                Logger::debug(&format!(
                    "{field}: path parameter has no {{{key}}} placeholder in {}",
                    endpoint.path
                ));
            }
        }

        if let Some(set_variables) = &endpoint.set_variables {
            for (var, source) in &set_variables.body {
                if source.trim().is_empty() {
                    issues.push(format!(
                        "endpoints.{name}.set-variables.body.{var}: source path is required"
                    ));
                }
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::invalid(issues))
    }
}
