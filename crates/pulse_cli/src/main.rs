use anyhow::Context;
use clap::Parser;
use pulse_core::FetchConfig;
use pulse_scraper::cli::{handle_command, ScraperArgs};
use pulse_scraper::logging::init_logging;
use pulse_scraper::{HttpFetcher, PageAnalyzer};
use pulse_web::{AppState, SuccessEnvelope};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // a bare number means seconds
        if !current_number.is_empty() {
            total_seconds += current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }
        if total_seconds == 0 {
            return Err("Duration must be at least one second".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headline, keyword and trend analysis for news front pages", long_about = None)]
struct Cli {
    /// Whole-request timeout for page fetches (e.g. 30, 30s, 1m30s)
    #[arg(long, global = true, env = "PULSE_TIMEOUT", default_value = "30s")]
    timeout: HumanDuration,

    /// Maximum redirects followed per fetch
    #[arg(long, global = true, env = "PULSE_MAX_REDIRECTS", default_value_t = 5)]
    max_redirects: usize,

    /// Override the browser-like User-Agent header
    #[arg(long, global = true, env = "PULSE_USER_AGENT")]
    user_agent: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "PULSE_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze one page and print the result as JSON
    Analyze(ScraperArgs),
    /// Run the HTTP API
    Serve {
        #[arg(long, env = "PULSE_ADDR", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        let config = FetchConfig::new()
            .with_timeout(self.timeout.0)
            .with_max_redirects(self.max_redirects);
        match &self.user_agent {
            Some(user_agent) => config.with_user_agent(user_agent.as_str()),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let fetcher = HttpFetcher::new(cli.fetch_config()).context("Failed to build HTTP client")?;
    let analyzer = PageAnalyzer::new(Arc::new(fetcher));

    match cli.command {
        Commands::Analyze(args) => {
            let outcome = handle_command(args, &analyzer).await?;
            info!(
                "Analyzed {}: {} articles",
                outcome.source,
                outcome.report.articles.len()
            );
            let envelope = SuccessEnvelope::new(outcome.source, outcome.report);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Serve { addr } => {
            pulse_web::serve(addr, AppState::new(analyzer)).await?;
        }
    }

    Ok(())
}
