use super::http::{execute_request, HttpError};
use super::koi_client_models::{
    ApiOverview, BindingInfo, CallResult, EndpointDetails, EndpointInfo, ParameterInfo, RunOptions,
};
use super::loader::{run_with_loader, TerminalSpinner, LOADER_DELAY};
use crate::config::{Config, Endpoint};
use crate::core::error::KoiError;
use crate::core::logger::Logger;
use crate::environment::EnvAccessor;
use crate::params::{build_request, FlagMap, Resolver};
use crate::variables::{extract_bindings, VariableStore};
use std::path::Path;

/// Runs endpoints from a loaded catalogue and feeds captured values back into
/// the variable store.
pub struct KoiClient {
    config: Config,
    store: VariableStore,
    env: Box<dyn EnvAccessor>,
    http: reqwest::Client,
    options: RunOptions,
}

impl KoiClient {
    pub fn new(
        config: Config,
        store: VariableStore,
        env: Box<dyn EnvAccessor>,
        options: RunOptions,
    ) -> Self {
        Self {
            config,
            store,
            env,
            http: reqwest::Client::new(),
            options,
        }
    }

    /// Loads the store first so its values can be templated into the config.
    pub fn open(
        config_path: &Path,
        variables_path: &Path,
        env: Box<dyn EnvAccessor>,
        options: RunOptions,
    ) -> Result<Self, KoiError> {
        let store = VariableStore::load(variables_path)?;
        let config = crate::config::load_config(config_path, store.variables())?;
        Ok(Self::new(config, store, env, options))
    }

    #[cfg(test)]
    fn variables(&self) -> &crate::variables::VariableMap {
        self.store.variables()
    }

    fn endpoint(&self, name: &str) -> Result<&Endpoint, KoiError> {
        self.config
            .endpoints
            .get(name)
            .ok_or_else(|| KoiError::EndpointNotFound(name.to_string()))
    }

    pub fn list_endpoints(&self) -> Vec<EndpointInfo> {
        self.config
            .endpoints
            .iter()
            .map(|(name, endpoint)| EndpointInfo {
                name: name.clone(),
                method: endpoint.method.as_str().to_string(),
                path: endpoint.path.clone(),
                description: endpoint.description.clone(),
            })
            .collect()
    }

    pub fn overview(&self) -> ApiOverview {
        ApiOverview {
            base_url: self.config.api.base_url.clone(),
            version: self.config.api.version.clone(),
            endpoints: self.list_endpoints(),
        }
    }

    pub fn endpoint_details(&self, name: &str) -> Result<EndpointDetails, KoiError> {
        let endpoint = self.endpoint(name)?;

        let parameters = endpoint
            .parameters
            .iter()
            .map(|(key, param)| ParameterInfo {
                name: key.clone(),
                param_type: param.param_type.as_str().to_string(),
                placement: param.placement_for(endpoint.method).as_str().to_string(),
                mode: Some(param.mode.trim())
                    .filter(|m| !m.is_empty())
                    .map(str::to_string),
                required: param.required,
                default: endpoint.defaults.get(key).cloned(),
                description: param.description.clone(),
            })
            .collect();

        let bindings = endpoint
            .body_bindings()
            .map(|body| {
                body.iter()
                    .map(|(variable, path)| BindingInfo {
                        variable: variable.clone(),
                        path: path.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(EndpointDetails {
            name: name.to_string(),
            method: endpoint.method.as_str().to_string(),
            path: endpoint.path.clone(),
            description: endpoint.description.clone(),
            parameters,
            bindings,
        })
    }

    /// Resolves parameters, sends the request and captures bindings. Any HTTP
    /// status is a successful run.
    pub async fn run(&mut self, name: &str, flags: &FlagMap) -> Result<CallResult, KoiError> {
        let endpoint = self.endpoint(name)?.clone();

        let resolver = Resolver::new(flags, &*self.env);
        let params = resolver.resolve_all(&endpoint)?;
        let plan = build_request(
            &self.config.api.base_url,
            endpoint.method,
            &endpoint.path,
            &params,
        );

        let call = execute_request(&self.http, &plan, &self.config.api.headers);
        let outcome: Result<CallResult, HttpError> = if self.options.show_loader {
            run_with_loader(LOADER_DELAY, TerminalSpinner::default(), call).await
        } else {
            call.await
        };

        let result = outcome.map_err(|source| KoiError::Call {
            endpoint: name.to_string(),
            path: endpoint.path.clone(),
            source,
        })?;

        self.capture(name, &endpoint, &result);
        Ok(result)
    }

    fn capture(&mut self, name: &str, endpoint: &Endpoint, result: &CallResult) {
        let Some(bindings) = endpoint.body_bindings() else {
            return;
        };

        let Some(extraction) = extract_bindings(&result.body, bindings) else {
            crate::debug_log!(
                "Response of {name} is not JSON, skipping {} binding(s)",
                bindings.len()
            );
            return;
        };

        for (variable, path) in &extraction.missing {
            crate::debug_log!(
                "Path {path} not found in response of {name}, {variable} left unchanged"
            );
        }

        for (variable, value) in extraction.captured {
            match self.store.set(&variable, value) {
                Ok(()) => crate::debug_log!("Stored variable {variable}"),
                Err(e) => Logger::warn(&format!("could not save variable {variable}: {e}")),
            }
        }
    }
}
