use crate::core::{Outcome, Projector};
use serde::Serialize;

/// A projector output together with the fields that cannot be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection<T> {
    pub output: T,
    pub non_finite: Vec<&'static str>,
}

impl<T> Projection<T> {
    pub fn is_displayable(&self) -> bool {
        self.non_finite.is_empty()
    }
}

pub struct ProjectionEngine<P: Projector> {
    projector: P,
}

impl<P: Projector> ProjectionEngine<P>
where
    P::Input: std::fmt::Debug,
    P::Output: std::fmt::Debug,
{
    pub fn new(projector: P) -> Self {
        Self { projector }
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Runs the projector once. Values are passed through untouched.
    pub fn run(&self, input: &P::Input) -> Projection<P::Output> {
        let name = self.projector.name();
        tracing::debug!("Running {} projection with {:?}", name, input);

        let output = self.projector.project(input);
        let non_finite = output.non_finite_fields();

        // 非有限值照樣回傳，只記錄警告
        for field in &non_finite {
            tracing::warn!("{} projection produced a non-finite {}", name, field);
        }
        tracing::debug!("{} projection result: {:?}", name, output);

        Projection { output, non_finite }
    }
}
