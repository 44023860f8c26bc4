pub mod annuity;
pub mod engine;
pub mod roi;
pub mod tier;

pub use crate::domain::model::{
    AnnuityResult, LoanParameters, PlanTier, RoiParameters, RoiResult,
};
pub use crate::domain::ports::{DefaultsProvider, Outcome, Projector};
pub use annuity::AnnuityProjector;
pub use engine::{Projection, ProjectionEngine};
pub use roi::RoiProjector;
pub use tier::PlanTierResolver;
