//! Input ranges and defaults of the two calculators.
//!
//! The projectors accept any numeric input. These ranges are what the
//! calculators expose to users, and the CLI checks inputs against them, or
//! snaps them onto the slider grid, before calling a projector.

use crate::core::{LoanParameters, RoiParameters};
use crate::utils::error::Result;
use crate::utils::format::round_half_up;
use crate::utils::validation::{validate_positive, validate_range};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// NaN clamps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamps, then moves to the nearest step counted from `min`.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = round_half_up((clamped - self.min) / self.step);
        // Strip binary noise such as 6.1000000000000005.
        let snapped = ((self.min + steps * self.step) * 1e9).round() / 1e9;
        snapped.min(self.max)
    }

    pub fn check(&self, field_name: &str, value: f64) -> Result<()> {
        validate_range(field_name, value, self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoanLimits {
    pub amount: InputRange,
    pub rate: InputRange,
    pub term: InputRange,
}

pub const LOAN_LIMITS: LoanLimits = LoanLimits {
    amount: InputRange::new(1_000_000.0, 30_000_000.0, 100_000.0),
    rate: InputRange::new(3.0, 20.0, 0.1),
    term: InputRange::new(1.0, 30.0, 1.0),
};

pub const DEFAULT_LOAN: LoanParameters = LoanParameters {
    amount: 5_000_000.0,
    annual_rate_percent: 6.0,
    term_years: 20,
};

#[derive(Debug, Clone, Copy)]
pub struct RoiLimits {
    pub projects_per_month: InputRange,
    pub avg_area: InputRange,
    pub price_per_unit: InputRange,
    pub team_size: InputRange,
    pub growth_percent: InputRange,
}

pub const ROI_LIMITS: RoiLimits = RoiLimits {
    projects_per_month: InputRange::new(1.0, 30.0, 1.0),
    avg_area: InputRange::new(60.0, 500.0, 10.0),
    price_per_unit: InputRange::new(200.0, 3_000.0, 50.0),
    team_size: InputRange::new(1.0, 20.0, 1.0),
    growth_percent: InputRange::new(10.0, 200.0, 10.0),
};

pub const DEFAULT_ROI: RoiParameters = RoiParameters {
    projects_per_month: 4.0,
    avg_area: 180.0,
    price_per_unit: 800.0,
    team_size: 3.0,
    growth_percent: 50.0,
};

impl LoanLimits {
    pub fn check(&self, params: &LoanParameters) -> Result<()> {
        self.amount.check("mortgage.amount", params.amount)?;
        self.rate.check("mortgage.rate", params.annual_rate_percent)?;
        self.term.check("mortgage.term", f64::from(params.term_years))?;
        Ok(())
    }

    /// Moves every input to the nearest value its slider can produce.
    pub fn snap(&self, params: &LoanParameters) -> LoanParameters {
        LoanParameters {
            amount: self.amount.snap(params.amount),
            annual_rate_percent: self.rate.snap(params.annual_rate_percent),
            term_years: self.term.snap(f64::from(params.term_years)) as u32,
        }
    }
}

impl RoiLimits {
    pub fn check(&self, params: &RoiParameters) -> Result<()> {
        self.projects_per_month
            .check("roi.projects", params.projects_per_month)?;
        self.avg_area.check("roi.area", params.avg_area)?;
        self.price_per_unit.check("roi.price", params.price_per_unit)?;
        self.team_size.check("roi.team", params.team_size)?;
        self.growth_percent.check("roi.growth", params.growth_percent)?;
        Ok(())
    }

    pub fn snap(&self, params: &RoiParameters) -> RoiParameters {
        RoiParameters {
            projects_per_month: self.projects_per_month.snap(params.projects_per_month),
            avg_area: self.avg_area.snap(params.avg_area),
            price_per_unit: self.price_per_unit.snap(params.price_per_unit),
            team_size: self.team_size.snap(params.team_size),
            growth_percent: self.growth_percent.snap(params.growth_percent),
        }
    }
}

/// 方案查詢只接受有限的正數人數；NaN 會讓每個門檻比較都失敗而落到最貴的方案
pub fn check_team_size(team_size: f64) -> Result<()> {
    validate_positive("tier.team_size", team_size)
}
