#[cfg(feature = "cli")]
pub mod cli;
pub mod limits;
pub mod toml_config;

use crate::core::{DefaultsProvider, LoanParameters, RoiParameters};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Applies explicitly given values over the configured defaults.
pub fn merge_loan(
    defaults: &impl DefaultsProvider,
    amount: Option<f64>,
    rate: Option<f64>,
    term: Option<u32>,
) -> LoanParameters {
    let base = defaults.loan_defaults();
    LoanParameters {
        amount: amount.unwrap_or(base.amount),
        annual_rate_percent: rate.unwrap_or(base.annual_rate_percent),
        term_years: term.unwrap_or(base.term_years),
    }
}

pub fn merge_roi(
    defaults: &impl DefaultsProvider,
    projects: Option<f64>,
    area: Option<f64>,
    price: Option<f64>,
    team: Option<f64>,
    growth: Option<f64>,
) -> RoiParameters {
    let base = defaults.roi_defaults();
    RoiParameters {
        projects_per_month: projects.unwrap_or(base.projects_per_month),
        avg_area: area.unwrap_or(base.avg_area),
        price_per_unit: price.unwrap_or(base.price_per_unit),
        team_size: team.unwrap_or(base.team_size),
        growth_percent: growth.unwrap_or(base.growth_percent),
    }
}
