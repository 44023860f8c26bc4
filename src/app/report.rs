//! Rendering of projections for the command line.
//!
//! Text output is for people and goes through [`crate::utils::format`], so
//! non-finite values appear as a placeholder. JSON and CSV keep full
//! precision for downstream tools.

use crate::core::{
    AnnuityResult, LoanParameters, PlanTier, Projection, RoiParameters, RoiResult,
};
use crate::utils::error::{CalcError, Result};
use crate::utils::format::{
    format_currency, format_decimal, format_gain, format_number, format_payback,
    format_percent, CURRENCY_SUFFIX, MONTHS_SUFFIX,
};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CalcError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct MortgageReport<'a> {
    kind: &'static str,
    input: &'a LoanParameters,
    result: &'a AnnuityResult,
    non_finite: &'a [&'static str],
}

#[derive(Serialize)]
struct RoiReport<'a> {
    kind: &'static str,
    input: &'a RoiParameters,
    result: &'a RoiResult,
    plan_name: &'static str,
    additional_projects_display: f64,
    new_projects_display: f64,
    non_finite: &'a [&'static str],
}

#[derive(Serialize)]
struct TierReport {
    kind: &'static str,
    team_size: f64,
    tier: PlanTier,
    name: &'static str,
    monthly_cost: f64,
}

fn plan_label(plan: PlanTier) -> String {
    format!(
        "{} — {}/{}",
        plan.name(),
        format_currency(plan.monthly_cost()),
        MONTHS_SUFFIX
    )
}

/// 標題一行，其後每列標籤靠左對齊到最長標籤的寬度
fn text_block(title: &str, rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0) + 1;
    let mut out = format!("{}\n", title);
    for (label, value) in rows {
        out.push_str(&format!("  {:<width$}{}\n", label, value, width = width));
    }
    out
}

fn rows_to_csv(rows: &[(&str, String)]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["field", "value"])?;
    for (field, value) in rows {
        writer.write_record([*field, value.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CalcError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_mortgage(
    input: &LoanParameters,
    projection: &Projection<AnnuityResult>,
    format: OutputFormat,
) -> Result<String> {
    let result = &projection.output;
    match format {
        OutputFormat::Text => {
            let amount = |value: f64| format!("{} {}", format_number(value), CURRENCY_SUFFIX);
            Ok(text_block(
                "Mortgage",
                &[
                    ("Loan amount:", amount(input.amount)),
                    (
                        "Interest rate:",
                        format!("{}%", format_decimal(input.annual_rate_percent)),
                    ),
                    ("Term:", format!("{} years", input.term_years)),
                    ("Monthly payment:", amount(result.monthly_payment)),
                    ("Total payment:", amount(result.total_payment)),
                    ("Overpayment:", amount(result.total_interest)),
                ],
            ))
        }
        OutputFormat::Json => {
            let report = MortgageReport {
                kind: "mortgage",
                input,
                result,
                non_finite: &projection.non_finite,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => rows_to_csv(&[
            ("amount", input.amount.to_string()),
            ("annual_rate_percent", input.annual_rate_percent.to_string()),
            ("term_years", input.term_years.to_string()),
            ("monthly_payment", result.monthly_payment.to_string()),
            ("total_payment", result.total_payment.to_string()),
            ("total_interest", result.total_interest.to_string()),
        ]),
    }
}

pub fn render_roi(
    input: &RoiParameters,
    projection: &Projection<RoiResult>,
    format: OutputFormat,
) -> Result<String> {
    let result = &projection.output;
    match format {
        OutputFormat::Text => {
            let projects = format!(
                "{} → {} (+{}%)",
                format_decimal(input.projects_per_month),
                format_decimal(result.new_projects_display()),
                format_decimal(input.growth_percent)
            );
            Ok(text_block(
                "ROI",
                &[
                    (
                        "Revenue per project:",
                        format_currency(result.revenue_per_project),
                    ),
                    (
                        "Current revenue / month:",
                        format_currency(result.current_revenue_per_month),
                    ),
                    ("Plan:", plan_label(result.plan)),
                    ("Projects / month:", projects),
                    (
                        "Additional projects:",
                        format!("+{}", format_decimal(result.additional_projects_display())),
                    ),
                    (
                        "Additional revenue / month:",
                        format_gain(result.additional_revenue_per_month),
                    ),
                    (
                        "Additional revenue / year:",
                        format_gain(result.additional_revenue_per_year),
                    ),
                    ("ROI:", format_percent(result.roi_percent)),
                    ("Payback:", format_payback(result.payback_months)),
                ],
            ))
        }
        OutputFormat::Json => {
            let report = RoiReport {
                kind: "roi",
                input,
                result,
                plan_name: result.plan.name(),
                additional_projects_display: result.additional_projects_display(),
                new_projects_display: result.new_projects_display(),
                non_finite: &projection.non_finite,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => rows_to_csv(&[
            ("projects_per_month", input.projects_per_month.to_string()),
            ("avg_area", input.avg_area.to_string()),
            ("price_per_unit", input.price_per_unit.to_string()),
            ("team_size", input.team_size.to_string()),
            ("growth_percent", input.growth_percent.to_string()),
            ("revenue_per_project", result.revenue_per_project.to_string()),
            (
                "current_revenue_per_month",
                result.current_revenue_per_month.to_string(),
            ),
            ("additional_projects", result.additional_projects.to_string()),
            ("new_projects_per_month", result.new_projects_per_month.to_string()),
            ("new_revenue_per_month", result.new_revenue_per_month.to_string()),
            ("plan", result.plan.name().to_string()),
            ("plan_monthly_cost", result.plan_monthly_cost.to_string()),
            (
                "additional_revenue_per_month",
                result.additional_revenue_per_month.to_string(),
            ),
            (
                "additional_revenue_per_year",
                result.additional_revenue_per_year.to_string(),
            ),
            ("roi_percent", result.roi_percent.to_string()),
            ("payback_months", result.payback_months.to_string()),
        ]),
    }
}

pub fn render_tier(team_size: f64, tier: PlanTier, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Team of {}: {}\n",
            format_decimal(team_size),
            plan_label(tier)
        )),
        OutputFormat::Json => {
            let report = TierReport {
                kind: "tier",
                team_size,
                tier,
                name: tier.name(),
                monthly_cost: tier.monthly_cost(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => rows_to_csv(&[
            ("team_size", team_size.to_string()),
            ("tier", tier.name().to_string()),
            ("monthly_cost", tier.monthly_cost().to_string()),
        ]),
    }
}
