pub mod data;
pub mod defaults;
pub mod io;
pub mod printing;

pub use data::Config;
pub use defaults::{DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};
pub use io::ConfigError;
