use planometrica_calc::app::report::{render_mortgage, render_roi, OutputFormat};
use planometrica_calc::config::limits::{DEFAULT_LOAN, DEFAULT_ROI};
use planometrica_calc::utils::format::PLACEHOLDER;
use planometrica_calc::{
    AnnuityProjector, LoanParameters, ProjectionEngine, RoiParameters, RoiProjector,
};

/// Labels are padded one column past the longest label of the block.
const MORTGAGE_LABEL_WIDTH: usize = "Monthly payment:".len() + 1;
const ROI_LABEL_WIDTH: usize = "Additional revenue / month:".len() + 1;

fn mortgage_row(label: &str, value: &str) -> String {
    format!("  {:<width$}{}\n", label, value, width = MORTGAGE_LABEL_WIDTH)
}

fn roi_row(label: &str, value: &str) -> String {
    format!("  {:<width$}{}\n", label, value, width = ROI_LABEL_WIDTH)
}

#[test]
fn test_default_mortgage_text() {
    let projection = ProjectionEngine::new(AnnuityProjector::new()).run(&DEFAULT_LOAN);
    let text = render_mortgage(&DEFAULT_LOAN, &projection, OutputFormat::Text).unwrap();

    assert!(text.starts_with("Mortgage\n"));
    assert!(text.contains(&mortgage_row("Loan amount:", "5\u{a0}000\u{a0}000 ₽")));
    assert!(text.contains(&mortgage_row("Interest rate:", "6%")));
    assert!(text.contains(&mortgage_row("Monthly payment:", "35\u{a0}822 ₽")));
    assert!(text.contains(&mortgage_row("Overpayment:", "3\u{a0}597\u{a0}173 ₽")));
}

#[test]
fn test_degenerate_mortgage_shows_placeholder() {
    let input = LoanParameters {
        term_years: 0,
        ..DEFAULT_LOAN
    };
    let projection = ProjectionEngine::new(AnnuityProjector::new()).run(&input);
    let text = render_mortgage(&input, &projection, OutputFormat::Text).unwrap();

    let placeholder = format!("{} ₽", PLACEHOLDER);
    assert!(text.contains(&mortgage_row("Monthly payment:", &placeholder)));
    assert!(!text.contains("NaN"));
    assert!(!text.contains("inf"));
}

#[test]
fn test_mortgage_json_lists_non_finite_fields() {
    let input = LoanParameters {
        term_years: 0,
        ..DEFAULT_LOAN
    };
    let projection = ProjectionEngine::new(AnnuityProjector::new()).run(&input);
    let json = render_mortgage(&input, &projection, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["kind"], "mortgage");
    assert!(value["result"]["monthly_payment"].is_null());
    let fields = value["non_finite"].as_array().unwrap();
    assert!(fields.iter().any(|f| f == "monthly_payment"));
}

#[test]
fn test_default_roi_text() {
    let projection = ProjectionEngine::new(RoiProjector::new()).run(&DEFAULT_ROI);
    let text = render_roi(&DEFAULT_ROI, &projection, OutputFormat::Text).unwrap();

    assert!(text.contains(&roi_row("Revenue per project:", "144\u{a0}000 ₽")));
    assert!(text.contains(&roi_row("Plan:", "ПРО — 33\u{a0}200 ₽/мес")));
    assert!(text.contains(&roi_row("Projects / month:", "4 → 6 (+50%)")));
    assert!(text.contains(&roi_row("Additional projects:", "+2")));
    assert!(text.contains(&roi_row("Additional revenue / month:", "254\u{a0}800 ₽")));
    assert!(text.contains(&roi_row("Additional revenue / year:", "3.1 млн ₽")));
    assert!(text.contains(&roi_row("ROI:", "767%")));
    assert!(text.contains(&roi_row("Payback:", "< 1 мес")));
}

#[test]
fn test_roi_without_growth_never_pays_back() {
    let input = RoiParameters {
        growth_percent: 0.0,
        ..DEFAULT_ROI
    };
    let projection = ProjectionEngine::new(RoiProjector::new()).run(&input);
    let text = render_roi(&input, &projection, OutputFormat::Text).unwrap();

    assert!(text.contains(&roi_row("Additional revenue / year:", PLACEHOLDER)));
    assert!(text.contains(&roi_row("ROI:", PLACEHOLDER)));
    assert!(text.contains(&roi_row("Payback:", "> 12 мес")));
}

#[test]
fn test_roi_json() {
    let projection = ProjectionEngine::new(RoiProjector::new()).run(&DEFAULT_ROI);
    let json = render_roi(&DEFAULT_ROI, &projection, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["kind"], "roi");
    assert_eq!(value["plan_name"], "ПРО");
    assert_eq!(value["result"]["plan"], "pro");
    assert_eq!(value["result"]["additional_revenue_per_month"], 254_800.0);
    assert_eq!(value["new_projects_display"], 6.0);
    assert!(value["non_finite"].as_array().unwrap().is_empty());
}

#[test]
fn test_large_revenue_rounds_half_up_in_millions() {
    let input = RoiParameters {
        avg_area: 500.0,
        price_per_unit: 2_500.0,
        ..DEFAULT_ROI
    };
    let projection = ProjectionEngine::new(RoiProjector::new()).run(&input);
    let text = render_roi(&input, &projection, OutputFormat::Text).unwrap();

    assert_eq!(projection.output.revenue_per_project, 1_250_000.0);
    assert!(text.contains(&roi_row("Revenue per project:", "1.3 млн ₽")));
}

#[test]
fn test_roi_csv_keeps_infinite_payback() {
    let input = RoiParameters {
        growth_percent: 0.0,
        ..DEFAULT_ROI
    };
    let projection = ProjectionEngine::new(RoiProjector::new()).run(&input);
    let csv = render_roi(&input, &projection, OutputFormat::Csv).unwrap();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("field,value"));
    assert!(csv.contains("revenue_per_project,144000\n"));
    assert!(csv.contains("plan,ПРО\n"));
    assert!(csv.contains("payback_months,inf\n"));
}
