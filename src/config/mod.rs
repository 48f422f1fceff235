#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_allowed_values, validate_credential, validate_path, validate_positive_rate,
    validate_range, validate_url,
};

pub const OUTPUT_FORMATS: [&str; 3] = ["json", "csv", "contacts"];

/// Custom Search returns at most ten hits per request.
pub const MAX_RESULTS_LIMIT: usize = 10;

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    if config.query().trim().is_empty() {
        return Err(EtlError::ValidationError {
            message: "Please type a course name.".to_string(),
        });
    }

    validate_url("search.endpoint", config.search_endpoint())?;
    validate_credential("search.api_key", config.api_key())?;
    validate_credential("search.engine_id", config.engine_id())?;
    validate_range("search.max_results", config.max_results(), 1, MAX_RESULTS_LIMIT)?;
    validate_positive_rate("engine.exchange_rate", config.exchange_rate())?;
    validate_path("report.output_path", config.output_path())?;
    validate_allowed_values("report.output_formats", config.output_formats(), &OUTPUT_FORMATS)?;

    Ok(())
}
