#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_API_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/albums";
pub const DEFAULT_FIELD: &str = "title";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
