use std::fmt::Debug;
use std::sync::Arc;

use super::outcome::StepOutcome;
use crate::params::ParameterSet;

/// Contexto de ejecución entregado a `Step::execute`.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub job_name: &'a str,
    pub step_name: &'a str,
    pub params: &'a ParameterSet,
}

/// Trait que define un Step.
pub trait Step: Send + Sync + Debug {
    /// Nombre único dentro del job. Se compara de forma exacta.
    fn name(&self) -> &str;

    /// Ejecución del step. Sólo la invocan ejecutores.
    fn execute(&self, ctx: &StepContext<'_>) -> StepOutcome;
}

/// Handle compartido: la topología es dueña del step, el resto clona el `Arc`.
pub type StepHandle = Arc<dyn Step>;
