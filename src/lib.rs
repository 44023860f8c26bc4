pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    AnnuityProjector, AnnuityResult, LoanParameters, PlanTier, PlanTierResolver, Projection,
    ProjectionEngine, RoiParameters, RoiProjector, RoiResult,
};
pub use crate::utils::error::{CalcError, Result};
