use crate::step::StepHandle;

/// Secuencia ordenada de steps. Los nombres deben ser únicos; la unicidad se
/// verifica al construir el índice de resolución, no aquí.
#[derive(Debug, Clone, Default)]
pub struct LinearTopology {
    steps: Vec<StepHandle>,
}

impl LinearTopology {
    pub fn new(steps: Vec<StepHandle>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[StepHandle] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
