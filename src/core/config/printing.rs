use crate::core::config::data::Config;
use crate::core::config::defaults::DEFAULT_ENDPOINT;

impl Config {
    pub fn describe(&self) -> String {
        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("(unset, default {DEFAULT_ENDPOINT})"),
        };
        format!("Current configuration:\n  endpoint: {endpoint}")
    }

    pub fn print_all(&self) {
        println!("{}", self.describe());
    }
}
