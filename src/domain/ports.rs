/// A stateless numeric projection from one input set to one result.
pub trait Projector: Send + Sync {
    type Input;
    type Output: Outcome;

    fn name(&self) -> &'static str;
    fn project(&self, input: &Self::Input) -> Self::Output;
}

/// Reports fields of a result that cannot be shown to a user.
pub trait Outcome {
    fn non_finite_fields(&self) -> Vec<&'static str>;
}

/// Where the CLI gets its default calculator inputs from.
pub trait DefaultsProvider {
    fn loan_defaults(&self) -> crate::domain::model::LoanParameters;
    fn roi_defaults(&self) -> crate::domain::model::RoiParameters;
}
