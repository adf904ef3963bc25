//! Boost KYC demo: command-line front end for the verification backend.

mod config;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bkyc_client::{decode_json, result_document, BackendClient};
use bkyc_rows::{build_rows, render_rows};
use bkyc_types::{DocumentType, SessionToken};
use bkyc_utils::LogFormat;
use clap::Parser;

use crate::config::{DemoConfig, Overrides};

#[derive(Parser)]
#[command(name = "bkyc-demo", about = "Boost KYC verification demo")]
struct Cli {
    /// Base URL of the verification backend.
    #[arg(long, env = "BKYC_BASE_URL")]
    base_url: Option<String>,

    /// API key used to create sessions.
    #[arg(long, env = "BKYC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Seconds between result polls while verification is in progress.
    #[arg(long, env = "BKYC_POLL_INTERVAL")]
    poll_interval: Option<u64>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BKYC_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BKYC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the supported document types.
    Documents,

    /// Create a verification session and print its token.
    Session,

    /// Poll the backend for a session's full results and print them.
    Results {
        /// Session token returned by `session`.
        #[arg(long)]
        token: String,

        /// Print the raw JSON document instead of display rows.
        #[arg(long)]
        json: bool,
    },

    /// Flatten a result document from a file ("-" for stdin).
    Rows {
        #[arg(long)]
        file: PathBuf,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            poll_interval_secs: self.poll_interval,
            log_format: self.log_format,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = DemoConfig::load(cli.config.as_deref())?.apply(cli.overrides());
    bkyc_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Documents => {
            for document in DocumentType::ALL {
                println!("{:<10} {}", document.as_str(), document.label());
            }
        }
        Command::Session => {
            let client = BackendClient::with_http(config.backend)?;
            let token = client.create_session().await?;
            println!("{token}");
        }
        Command::Results { token, json } => {
            let client = BackendClient::with_http(config.backend)?;
            let token = SessionToken::new(token);

            let document = tokio::select! {
                result = client.get_full_results(&token) => result?,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupted, abandoning result poll");
                    return Ok(());
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                print!("{}", render_rows(&build_rows(&document)));
            }
        }
        Command::Rows { file } => {
            let value: serde_json::Value = decode_json(read_input(&file)?.as_bytes())
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            let document = result_document(value)?;
            print!("{}", render_rows(&build_rows(&document)));
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_command_with_overrides() {
        let cli = Cli::try_parse_from([
            "bkyc-demo",
            "--api-key",
            "k",
            "--log-format",
            "json",
            "results",
            "--token",
            "tok",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.api_key.as_deref(), Some("k"));
        assert_eq!(overrides.log_format, Some(LogFormat::Json));
        assert!(matches!(cli.command, Command::Results { ref token, json: false } if token == "tok"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["bkyc-demo", "--log-format", "xml", "documents"]).is_err());
    }

    #[test]
    fn read_input_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, r#"{"a": 1}"#).unwrap();
        assert_eq!(read_input(&path).unwrap(), r#"{"a": 1}"#);
        assert!(read_input(&dir.path().join("missing.json")).is_err());
    }
}
