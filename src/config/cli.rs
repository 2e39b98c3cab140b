use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, validate_url, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "slurry-wizard")]
#[command(about = "Slurry storage and nitrogen loading calculator for livestock farms")]
pub struct CliConfig {
    /// TOML farm snapshot to calculate from
    #[arg(long)]
    pub input: String,

    /// Local rainfall data CSV (grid_reference,jan..dec)
    #[arg(long)]
    pub rainfall_data: Option<String>,

    /// HTTP(S) endpoint serving the rainfall data CSV
    #[arg(long, conflicts_with = "rainfall_data")]
    pub rainfall_url: Option<String>,

    /// Settings CSV providing the rainfall clamp limits
    #[arg(long)]
    pub settings: Option<String>,

    /// Report format
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(path) = &self.rainfall_data {
            validate_path("rainfall_data", path)?;
        }
        if let Some(url) = &self.rainfall_url {
            validate_url("rainfall_url", url)?;
        }
        if let Some(path) = &self.settings {
            validate_path("settings", path)?;
        }
        validate_one_of("format", &self.format, &["text", "json"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            input: "farm.toml".to_string(),
            rainfall_data: None,
            rainfall_url: None,
            settings: None,
            format: "text".to_string(),
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn bad_format_fails() {
        let mut config = base_config();
        config.format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_rainfall_url_fails() {
        let mut config = base_config();
        config.rainfall_url = Some("ftp://rainfall.example".to_string());
        assert!(config.validate().is_err());
    }
}
