mod config;
mod fetcher;
mod markdown;
mod memo;
mod writer;

use clap::Parser;
use reqwest::Client;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Error, Debug)]
enum ApplicationError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] fetcher::Error),
    #[error("write failed: {0}")]
    Write(#[from] writer::Error),
}

#[derive(Parser, Debug)]
#[command(version, about = "Export memos to a markdown file", long_about = None)]
struct Args {
    /// Tag or string to filter memos; empty exports everything
    #[arg(default_value = "")]
    query: String,
    /// Destination markdown file
    #[arg(short, long)]
    output: Option<String>,
}

async fn app(args: Args, config: &Config) -> Result<String, ApplicationError> {
    let output = args
        .output
        .unwrap_or_else(|| config.default_output.clone());

    let client = Client::new();
    let memos = fetcher::fetch_all_memos(&client, config).await?;
    let memos = markdown::filter(memos, &args.query);
    let document = markdown::render(&memos, &args.query);
    writer::write(&output, &document)?;

    Ok(format!("Exported {} memos to {}", memos.len(), output))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config error: {}", e);
            std::process::exit(1);
        }
    };

    match app(args, &config).await {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
