pub mod analyzer;
pub mod cli;
pub mod config;
pub mod document;
pub mod extractor;
pub mod fetcher;
pub mod http_client;
pub mod models;
pub mod reporter;
pub mod scorer;

use anyhow::{Context, Result};
use cli::Cli;
use colored::*;
use config::Config;
use document::HtmlDocument;
use indicatif::{ProgressBar, ProgressStyle};
use reporter::Reporter;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

pub async fn run(args: Cli) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    // Config file values fill in whatever the CLI left at its default
    let args = match &args.config {
        Some(path) => Config::from_file(Path::new(path))?.merge_with_cli(&args),
        None => match Config::from_default_paths()? {
            Some(config) => config.merge_with_cli(&args),
            None => args,
        },
    };

    println!(
        "{}",
        "Pagegrade - On-page SEO Analyzer".bright_cyan().bold()
    );
    println!("{}", "=".repeat(50).bright_blue());
    println!();

    // Validate URL
    if !args.url.starts_with("http://") && !args.url.starts_with("https://") {
        anyhow::bail!("URL must start with http:// or https://");
    }
    let url = Url::parse(&args.url).context("Invalid URL")?;

    println!("{} {}", "Analyzing:".bright_white().bold(), url);
    println!();

    let client = http_client::build_http_client(args.timeout)?;

    if args.verbose {
        println!("{}", "Fetching page and probing robots.txt...".bright_yellow());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("[{elapsed_precise}] {spinner:.cyan} Fetching {msg}")
            .expect("Spinner template should be valid"),
    );
    spinner.set_message(url.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let retrieved = fetcher::retrieve(&client, &url).await;
    spinner.finish_and_clear();
    let (html, retrieval) = retrieved?;

    if args.verbose {
        println!(
            "{} {} bytes fetched, robots.txt {}",
            "Success:".bright_green().bold(),
            html.len(),
            retrieval.robots_status
        );
        println!();
    }

    let doc = HtmlDocument::parse(&html);
    let report = analyzer::analyze(&doc, retrieval);

    let rendered = Reporter::generate_report(
        url.as_str(),
        fetcher::robots_url(&url).as_str(),
        report,
    );

    // Output report
    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&rendered)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&rendered);
        }
    }

    // Save to file if requested
    if let Some(filename) = args.save {
        Reporter::save_json_report(&rendered, &filename)?;
    }

    Ok(())
}
