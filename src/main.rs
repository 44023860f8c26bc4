use anyhow::Context;
use clap::Parser;
use planometrica_calc::app::report::{self, OutputFormat};
use planometrica_calc::config::cli::Command;
use planometrica_calc::config::limits::{check_team_size, LOAN_LIMITS, ROI_LIMITS};
use planometrica_calc::config::{merge_loan, merge_roi};
use planometrica_calc::utils::{logger, validation::Validate};
use planometrica_calc::{
    AnnuityProjector, CalcError, CliConfig, PlanTierResolver, ProjectionEngine, RoiProjector,
    TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(config) {
        tracing::error!("❌ {:#}", e);
        // 只有自家錯誤才有修復建議
        if let Some(calc_error) = e.downcast_ref::<CalcError>() {
            eprintln!("💡 Suggestion: {}", calc_error.recovery_suggestion());
        }
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_file_config(path: Option<&str>) -> anyhow::Result<TomlConfig> {
    let Some(path) = path else {
        return Ok(TomlConfig::default());
    };

    let file_config = TomlConfig::from_file(path)
        .with_context(|| format!("Failed to load config file '{}'", path))?;
    file_config
        .validate()
        .with_context(|| format!("Invalid config file '{}'", path))?;
    Ok(file_config)
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    // 日誌格式由配置檔決定，所以要先讀檔再初始化日誌
    let file_config = load_file_config(config.config.as_deref())?;

    if file_config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded defaults from {}", path);
    }

    // 命令列優先，其次配置檔，最後是純文字
    let format = match config.format {
        Some(format) => format,
        None => file_config
            .output_format()
            .map(str::parse::<OutputFormat>)
            .transpose()?
            .unwrap_or_default(),
    };
    let clamp = config.clamp || file_config.clamp_enabled();

    let rendered = match &config.command {
        Command::Mortgage(args) => {
            let mut input = merge_loan(&file_config, args.amount, args.rate, args.term);
            if clamp {
                let snapped = LOAN_LIMITS.snap(&input);
                if snapped != input {
                    tracing::warn!("Mortgage inputs snapped from {:?} to {:?}", input, snapped);
                }
                input = snapped;
            } else {
                LOAN_LIMITS.check(&input)?;
            }

            // 建立引擎並執行
            let engine = ProjectionEngine::new(AnnuityProjector::new());
            let projection = engine.run(&input);
            report::render_mortgage(&input, &projection, format)?
        }
        Command::Roi(args) => {
            let mut input = merge_roi(
                &file_config,
                args.projects,
                args.area,
                args.price,
                args.team,
                args.growth,
            );
            if clamp {
                let snapped = ROI_LIMITS.snap(&input);
                if snapped != input {
                    tracing::warn!("ROI inputs snapped from {:?} to {:?}", input, snapped);
                }
                input = snapped;
            } else {
                ROI_LIMITS.check(&input)?;
            }

            let engine = ProjectionEngine::new(RoiProjector::new());
            let projection = engine.run(&input);
            report::render_roi(&input, &projection, format)?
        }
        Command::Tier { team_size } => {
            check_team_size(*team_size)?;
            let tier = PlanTierResolver::new().resolve(*team_size);
            report::render_tier(*team_size, tier, format)?
        }
    };

    print!("{}", rendered);
    Ok(())
}
