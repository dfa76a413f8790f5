use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pagegrade")]
#[command(about = "A CLI on-page SEO analyzer", long_about = None)]
pub struct Cli {
    /// The URL of the page to analyze
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// HTTP timeout in seconds (default: 30)
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
