use crate::config::{DEFAULT_API_ENDPOINT, DEFAULT_FIELD, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_field_name, validate_positive_number, validate_url, Validate,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line
    #[default]
    Text,
    /// A JSON array of strings
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "word-list")]
#[command(about = "Fetch a remote collection and list one field of every record")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_FIELD)]
    pub field: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "TOML file whose values replace the flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl CliConfig {
    /// Source flags set away from their defaults. A `--config` file replaces all of them.
    pub fn overridden_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.api_endpoint != DEFAULT_API_ENDPOINT {
            flags.push("api-endpoint");
        }
        if self.field != DEFAULT_FIELD {
            flags.push("field");
        }
        if self.timeout_seconds != DEFAULT_TIMEOUT_SECONDS {
            flags.push("timeout-seconds");
        }
        flags
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_field_name("field", &self.field)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
