mod catalog;
mod render;
mod visit;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tapreview")]
#[command(about = "Run and inspect NFC tap review sessions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a full tap session for a page URL and submit the given details
    Visit {
        /// Tapped page URL or query string, e.g. `?id=sunrise-cafe`
        #[arg(long, default_value = "")]
        url: String,
        /// Customer name
        #[arg(long)]
        name: String,
        /// Customer email
        #[arg(long)]
        email: String,
        /// Opt in to marketing
        #[arg(long)]
        consent: bool,
        /// Skip the welcome intro
        #[arg(long)]
        skip_intro: bool,
    },
    /// List businesses from the configured catalog
    Catalog {
        /// Show the embedded table instead of loading the configured source
        #[arg(long)]
        embedded: bool,
    },
    /// Check a customer name against the form rule
    CheckName { value: String },
    /// Check a customer email against the form rule
    CheckEmail { value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tapreview_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, catalog = %config.catalog_url, "configuration loaded");

    match cli.command {
        Commands::Visit {
            url,
            name,
            email,
            consent,
            skip_intro,
        } => {
            let input = visit::VisitInput {
                url,
                name,
                email,
                consent,
                skip_intro,
            };
            visit::run_visit(&config, input).await?;
        }
        Commands::Catalog { embedded } => catalog::run_catalog(&config, embedded).await?,
        Commands::CheckName { value } => report_field(tapreview_core::validate_name(&value)),
        Commands::CheckEmail { value } => report_field(tapreview_core::validate_email(&value)),
    }

    Ok(())
}

fn report_field(result: Result<&str, tapreview_core::FieldError>) {
    match result {
        Ok(value) => println!("ok: {value}"),
        Err(e) => println!("invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_visit_arguments() {
        let cli = Cli::try_parse_from([
            "tapreview",
            "visit",
            "--url",
            "?id=bella-salon",
            "--name",
            "Jo",
            "--email",
            "jo@example.com",
            "--consent",
        ])
        .expect("valid arguments");
        match cli.command {
            Commands::Visit {
                url,
                consent,
                skip_intro,
                ..
            } => {
                assert_eq!(url, "?id=bella-salon");
                assert!(consent);
                assert!(!skip_intro);
            }
            other => panic!("expected visit, got: {other:?}"),
        }
    }

    #[test]
    fn visit_requires_name_and_email() {
        assert!(Cli::try_parse_from(["tapreview", "visit", "--name", "Jo"]).is_err());
    }

    #[test]
    fn help_is_answered_by_the_parser() {
        let err = Cli::try_parse_from(["tapreview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn parses_catalog_flag() {
        let cli = Cli::try_parse_from(["tapreview", "catalog", "--embedded"]).expect("valid");
        assert!(matches!(cli.command, Commands::Catalog { embedded: true }));
    }
}
