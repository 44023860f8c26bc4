use crate::utils::format::round_to_tenth;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub amount: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

/// Annuity outcome, every field rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Subscription bracket selected by team size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Start,
    Pro,
    Company,
}

impl PlanTier {
    pub fn monthly_cost(self) -> f64 {
        match self {
            PlanTier::Start => 14_900.0,
            PlanTier::Pro => 33_200.0,
            PlanTier::Company => 80_000.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanTier::Start => "Старт",
            PlanTier::Pro => "ПРО",
            PlanTier::Company => "Компания",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiParameters {
    pub projects_per_month: f64,
    pub avg_area: f64,
    pub price_per_unit: f64,
    pub team_size: f64,
    pub growth_percent: f64,
}

/// Full-precision ROI projection. Rounding is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub revenue_per_project: f64,
    pub current_revenue_per_month: f64,
    pub additional_projects: f64,
    pub new_projects_per_month: f64,
    pub new_revenue_per_month: f64,
    pub plan: PlanTier,
    pub plan_monthly_cost: f64,
    pub additional_revenue_per_month: f64,
    pub additional_revenue_per_year: f64,
    pub roi_percent: f64,
    /// `f64::INFINITY` when the plan cost is never recouped; serialized as `null`.
    #[serde(with = "payback_serde")]
    pub payback_months: f64,
}

impl RoiResult {
    pub fn additional_projects_display(&self) -> f64 {
        round_to_tenth(self.additional_projects)
    }

    pub fn new_projects_display(&self) -> f64 {
        round_to_tenth(self.new_projects_per_month)
    }

    pub fn gross_additional_per_month(&self) -> f64 {
        self.new_revenue_per_month - self.current_revenue_per_month
    }
}

/// 回本月數：無限大（永不回本）寫成 `null`，讀回時還原為無限大
mod payback_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(months: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if months.is_finite() {
            serializer.serialize_f64(*months)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_tier_costs_and_names() {
        assert_eq!(PlanTier::Start.monthly_cost(), 14_900.0);
        assert_eq!(PlanTier::Pro.monthly_cost(), 33_200.0);
        assert_eq!(PlanTier::Company.monthly_cost(), 80_000.0);
        assert_eq!(PlanTier::Pro.to_string(), "ПРО");
    }

    #[test]
    fn test_plan_tier_serializes_lowercase() {
        let json = serde_json::to_string(&PlanTier::Company).unwrap();
        assert_eq!(json, "\"company\"");
    }
}
