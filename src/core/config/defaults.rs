use tracing::debug;

use crate::core::config::data::Config;
use crate::utils::url::normalize_base_url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";
pub const ENDPOINT_ENV_VAR: &str = "CHATPANE_ENDPOINT";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Pick the endpoint: CLI flag, then environment, then config file, then
    /// the built-in default. Blank values are skipped.
    pub fn resolve_endpoint(&self, cli: Option<&str>, env: Option<&str>) -> String {
        let (source, value) = if let Some(value) = non_blank(cli) {
            ("cli", value)
        } else if let Some(value) = non_blank(env) {
            ("env", value)
        } else if let Some(value) = non_blank(self.endpoint.as_deref()) {
            ("config", value)
        } else {
            ("default", DEFAULT_ENDPOINT)
        };

        let endpoint = normalize_base_url(value);
        debug!(source, %endpoint, "resolved chat endpoint");
        endpoint
    }

    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = Some(normalize_base_url(endpoint));
    }

    pub fn unset_endpoint(&mut self) {
        self.endpoint = None;
    }
}
