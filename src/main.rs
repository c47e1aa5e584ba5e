use anyhow::Context;
use clap::Parser;
use std::io::Write;
use word_list::utils::error::ErrorSeverity;
use word_list::utils::logger::{self, LogFormat};
use word_list::utils::validation::Validate;
use word_list::{
    CliConfig, ConfigProvider, HttpRecordSource, ListLoader, LoaderError, OutputFormat,
    TitleList, TomlConfig,
};

async fn load_with<C: ConfigProvider>(config: &C) -> Result<TitleList, LoaderError> {
    let source = HttpRecordSource::from_config(config)?;
    let loader = ListLoader::new(source, config.field());
    tracing::info!("Loading '{}' from {}", loader.field(), config.api_endpoint());
    loader.load().await
}

async fn run(config: &CliConfig) -> Result<TitleList, LoaderError> {
    match &config.config {
        Some(path) => {
            // The file replaces the flags, so only the file is validated
            for flag in config.overridden_flags() {
                tracing::warn!("--{} is ignored because --config is set", flag);
            }
            let file_config = TomlConfig::from_file(path)?;
            load_with(&file_config).await
        }
        None => {
            config.validate()?;
            load_with(config).await
        }
    }
}

fn print_titles<W: Write>(
    out: &mut W,
    titles: &TitleList,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for title in titles.iter() {
                writeln!(out, "{}", title).context("writing list")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, titles).context("encoding list as JSON")?;
            writeln!(out).context("writing list")?;
        }
    }

    Ok(())
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,      // warning only
        ErrorSeverity::Medium => 2,   // worth retrying
        ErrorSeverity::High => 1,     // bad input or data
        ErrorSeverity::Critical => 3, // system
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let log_format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);

    tracing::info!("Starting word-list");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(titles) => {
            tracing::info!("Fetched {} entries", titles.len());
            let stdout = std::io::stdout();
            print_titles(&mut stdout.lock(), &titles, config.format)?;
        }
        Err(e) => {
            tracing::error!(
                "Loading failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let code = exit_code(e.severity());
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
