use crate::core::PlanTier;

/// Largest team served by the single-seat plan.
pub const START_MAX_TEAM: f64 = 1.0;
/// Largest team served by the Pro plan.
pub const PRO_MAX_TEAM: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlanTierResolver;

impl PlanTierResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, team_size: f64) -> PlanTier {
        if team_size <= START_MAX_TEAM {
            PlanTier::Start
        } else if team_size <= PRO_MAX_TEAM {
            PlanTier::Pro
        } else {
            PlanTier::Company
        }
    }
}
