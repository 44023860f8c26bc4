use crate::core::{AnnuityResult, LoanParameters, Outcome, Projector};
use crate::utils::format::round_half_up;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Fixed monthly payment schedule for an amortizing loan.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnuityProjector;

impl AnnuityProjector {
    pub fn new() -> Self {
        Self
    }

    /// Monthly payment, total paid and overpayment for a loan.
    ///
    /// A zero rate splits the principal evenly across all payments. A zero
    /// term has no payments and yields non-finite values; callers guard it.
    pub fn compute(&self, amount: f64, annual_rate_percent: f64, term_years: u32) -> AnnuityResult {
        let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR;
        let number_of_payments = f64::from(term_years) * MONTHS_PER_YEAR;

        let monthly_payment = if monthly_rate == 0.0 {
            amount / number_of_payments
        } else {
            let growth = (1.0 + monthly_rate).powf(number_of_payments);
            amount * monthly_rate * growth / (growth - 1.0)
        };

        // 總額用未取整的月付計算，三個值最後才各自四捨五入
        let total_payment = monthly_payment * number_of_payments;
        let total_interest = total_payment - amount;

        AnnuityResult {
            monthly_payment: round_half_up(monthly_payment),
            total_payment: round_half_up(total_payment),
            total_interest: round_half_up(total_interest),
        }
    }
}

impl Projector for AnnuityProjector {
    type Input = LoanParameters;
    type Output = AnnuityResult;

    fn name(&self) -> &'static str {
        "mortgage"
    }

    fn project(&self, input: &LoanParameters) -> AnnuityResult {
        self.compute(input.amount, input.annual_rate_percent, input.term_years)
    }
}

impl Outcome for AnnuityResult {
    fn non_finite_fields(&self) -> Vec<&'static str> {
        [
            ("monthly_payment", self.monthly_payment),
            ("total_payment", self.total_payment),
            ("total_interest", self.total_interest),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
        .collect()
    }
}
