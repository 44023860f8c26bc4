use crate::core::tier::PlanTierResolver;
use crate::core::{Outcome, PlanTier, Projector, RoiParameters, RoiResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Incremental revenue, ROI and payback of a subscription plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiProjector {
    resolver: PlanTierResolver,
}

impl RoiProjector {
    pub fn new() -> Self {
        Self {
            resolver: PlanTierResolver::new(),
        }
    }

    pub fn compute(&self, params: &RoiParameters) -> RoiResult {
        let plan = self.resolver.resolve(params.team_size);
        self.compute_with_cost(params, plan, plan.monthly_cost())
    }

    /// Projection against an explicit monthly plan cost.
    pub fn compute_with_cost(
        &self,
        params: &RoiParameters,
        plan: PlanTier,
        plan_monthly_cost: f64,
    ) -> RoiResult {
        let revenue_per_project = params.avg_area * params.price_per_unit;
        let current_revenue_per_month = params.projects_per_month * revenue_per_project;

        let additional_projects = params.projects_per_month * (params.growth_percent / 100.0);
        let new_projects_per_month = params.projects_per_month + additional_projects;
        let new_revenue_per_month = new_projects_per_month * revenue_per_project;

        let additional_revenue_per_month =
            new_revenue_per_month - current_revenue_per_month - plan_monthly_cost;
        let additional_revenue_per_year = additional_revenue_per_month * MONTHS_PER_YEAR;

        let annual_plan_cost = plan_monthly_cost * MONTHS_PER_YEAR;
        let roi_percent = if annual_plan_cost > 0.0 {
            additional_revenue_per_year / annual_plan_cost * 100.0
        } else {
            0.0
        };

        // 回本以未扣方案費用的增量收入計算
        let gross_additional_per_month = new_revenue_per_month - current_revenue_per_month;
        let payback_months = if gross_additional_per_month > 0.0 {
            plan_monthly_cost / gross_additional_per_month
        } else {
            f64::INFINITY
        };

        RoiResult {
            revenue_per_project,
            current_revenue_per_month,
            additional_projects,
            new_projects_per_month,
            new_revenue_per_month,
            plan,
            plan_monthly_cost,
            additional_revenue_per_month,
            additional_revenue_per_year,
            roi_percent,
            payback_months,
        }
    }
}

impl Projector for RoiProjector {
    type Input = RoiParameters;
    type Output = RoiResult;

    fn name(&self) -> &'static str {
        "roi"
    }

    fn project(&self, input: &RoiParameters) -> RoiResult {
        self.compute(input)
    }
}

impl Outcome for RoiResult {
    fn non_finite_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = [
            ("revenue_per_project", self.revenue_per_project),
            ("current_revenue_per_month", self.current_revenue_per_month),
            ("additional_projects", self.additional_projects),
            ("new_projects_per_month", self.new_projects_per_month),
            ("new_revenue_per_month", self.new_revenue_per_month),
            ("additional_revenue_per_month", self.additional_revenue_per_month),
            ("additional_revenue_per_year", self.additional_revenue_per_year),
            ("roi_percent", self.roi_percent),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
        .collect();

        // Positive infinity is the "never recoups" answer, not a defect.
        if self.payback_months.is_nan() || self.payback_months == f64::NEG_INFINITY {
            fields.push("payback_months");
        }
        fields
    }
}
