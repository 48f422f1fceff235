use crate::adapters::search::DEFAULT_SEARCH_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-scout")]
#[command(about = "Find, rank and export training courses from web search results")]
pub struct CliConfig {
    /// Course name to search for, e.g. "welding yanbu"
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT)]
    pub search_endpoint: String,

    #[arg(long, env = "GOOGLE_CSE_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "GOOGLE_CSE_CX", default_value = "")]
    pub engine_id: String,

    #[arg(long, default_value = "10")]
    pub max_results: usize,

    /// Local currency units per USD
    #[arg(long, env = "USD_TO_SAR", default_value = "3.75")]
    pub exchange_rate: f64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Outputs to write: json, csv, contacts
    #[arg(long = "formats", value_delimiter = ',', default_value = "json,csv")]
    pub output_formats: Vec<String>,

    /// Result ids to include in the CSV report (default: all)
    #[arg(long, value_delimiter = ',')]
    pub pick: Vec<String>,

    /// Load settings from a TOML file instead of flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory between phases")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn engine_id(&self) -> &str {
        &self.engine_id
    }

    fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    fn max_results(&self) -> usize {
        self.max_results
    }

    fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn report_selection(&self) -> &[String] {
        &self.pick
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)
    }
}
