pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use adapters::http::HttpRecordSource;
pub use config::toml_config::TomlConfig;
pub use core::{cache::CachedList, loader::ListLoader};
pub use domain::model::{Record, TitleList};
pub use domain::ports::{ConfigProvider, RecordSource};
pub use utils::error::{LoaderError, Result};
