use crate::app::report::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "planometrica-calc")]
#[command(about = "Mortgage and ROI projections for the Planometrica calculators")]
pub struct CliConfig {
    /// Path to a TOML file with default inputs
    #[arg(short, long, env = "PLANOMETRICA_CONFIG")]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Snap inputs onto the calculator sliders instead of rejecting them
    #[arg(long)]
    pub clamp: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Annuity mortgage payment
    Mortgage(MortgageArgs),
    /// Incremental revenue, ROI and payback of a subscription
    Roi(RoiArgs),
    /// Plan tier for a team size
    Tier {
        #[arg(allow_negative_numbers = true)]
        team_size: f64,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct MortgageArgs {
    /// Loan amount
    #[arg(long)]
    pub amount: Option<f64>,

    /// Annual interest rate, percent
    #[arg(long)]
    pub rate: Option<f64>,

    /// Term in years
    #[arg(long)]
    pub term: Option<u32>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RoiArgs {
    /// Projects delivered per month
    #[arg(long)]
    pub projects: Option<f64>,

    /// Average project area, m²
    #[arg(long)]
    pub area: Option<f64>,

    /// Design price per m²
    #[arg(long)]
    pub price: Option<f64>,

    /// Team size
    #[arg(long)]
    pub team: Option<f64>,

    /// Expected throughput growth, percent
    #[arg(long)]
    pub growth: Option<f64>,
}
