mod commands;

use std::time::Duration;

use clap::{ArgAction, Parser};
use lexfind_core::SdkLexModelsClient;
use tracing_subscriber::EnvFilter;

use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "lexfind")]
#[command(version, about = "Look up Amazon Lex bots, intents and slot types")]
struct Cli {
    /// Named AWS profile (defaults to AWS_PROFILE or the default profile)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// AWS region (defaults to AWS_REGION or the profile's region)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Override the Lex model-building endpoint
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Versions requested per listing page (1-50)
    #[arg(long, global = true, value_parser = clap::value_parser!(i32).range(1..=50))]
    page_size: Option<i32>,

    /// Attempts per request, including the first
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// Operation timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    async fn client(&self) -> lexfind_core::Result<SdkLexModelsClient> {
        let mut builder = SdkLexModelsClient::builder();
        if let Some(profile) = &self.profile {
            builder = builder.profile(profile);
        }
        if let Some(region) = &self.region {
            builder = builder.region(region);
        }
        if let Some(url) = &self.endpoint_url {
            builder = builder.endpoint_url(url);
        }
        if let Some(page_size) = self.page_size {
            builder = builder.page_size(page_size);
        }
        if let Some(attempts) = self.max_attempts {
            builder = builder.max_attempts(attempts);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.operation_timeout(Duration::from_secs(secs));
        }
        builder.build().await
    }
}

fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,lexfind={0},lexfind_core={0}", level)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let client = cli.client().await?;
    let mut stdout = std::io::stdout().lock();
    commands::run(&cli.command, &client, &mut stdout).await
}
