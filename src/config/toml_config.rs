use crate::config::limits::{DEFAULT_LOAN, DEFAULT_ROI};
use crate::core::{DefaultsProvider, LoanParameters, RoiParameters};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_positive, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const VALID_FORMATS: [&str; 3] = ["text", "json", "csv"];
pub const VALID_LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// Optional calculator defaults loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub mortgage: Option<MortgageDefaults>,
    pub roi: Option<RoiDefaults>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MortgageDefaults {
    pub amount: Option<f64>,
    pub rate: Option<f64>,
    pub term: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoiDefaults {
    pub projects: Option<f64>,
    pub area: Option<f64>,
    pub price: Option<f64>,
    pub team: Option<f64>,
    pub growth: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub clamp: Option<bool>,
    pub log_format: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 先替換環境變數再解析
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(mortgage) = &self.mortgage {
            if let Some(amount) = mortgage.amount {
                validate_positive("mortgage.amount", amount)?;
            }
            if let Some(rate) = mortgage.rate {
                validate_non_negative("mortgage.rate", rate)?;
            }
            if mortgage.term == Some(0) {
                return Err(CalcError::InvalidConfigValueError {
                    field: "mortgage.term".to_string(),
                    value: "0".to_string(),
                    reason: "Term must be at least one year".to_string(),
                });
            }
        }

        // 成長率可以是 0，其餘 ROI 輸入必須為正
        if let Some(roi) = &self.roi {
            let positives = [
                ("roi.projects", roi.projects),
                ("roi.area", roi.area),
                ("roi.price", roi.price),
                ("roi.team", roi.team),
            ];
            for (field, value) in positives {
                if let Some(value) = value {
                    validate_positive(field, value)?;
                }
            }
            if let Some(growth) = roi.growth {
                validate_non_negative("roi.growth", growth)?;
            }
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validate_choice("output.format", format, &VALID_FORMATS)?;
            }
            if let Some(log_format) = &output.log_format {
                validate_choice("output.log_format", log_format, &VALID_LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn clamp_enabled(&self) -> bool {
        self.output.as_ref().and_then(|o| o.clamp).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.log_format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if !allowed.contains(&value) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

impl DefaultsProvider for TomlConfig {
    fn loan_defaults(&self) -> LoanParameters {
        let mortgage = self.mortgage.clone().unwrap_or_default();
        LoanParameters {
            amount: mortgage.amount.unwrap_or(DEFAULT_LOAN.amount),
            annual_rate_percent: mortgage.rate.unwrap_or(DEFAULT_LOAN.annual_rate_percent),
            term_years: mortgage.term.unwrap_or(DEFAULT_LOAN.term_years),
        }
    }

    fn roi_defaults(&self) -> RoiParameters {
        let roi = self.roi.clone().unwrap_or_default();
        RoiParameters {
            projects_per_month: roi.projects.unwrap_or(DEFAULT_ROI.projects_per_month),
            avg_area: roi.area.unwrap_or(DEFAULT_ROI.avg_area),
            price_per_unit: roi.price.unwrap_or(DEFAULT_ROI.price_per_unit),
            team_size: roi.team.unwrap_or(DEFAULT_ROI.team_size),
            growth_percent: roi.growth.unwrap_or(DEFAULT_ROI.growth_percent),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
