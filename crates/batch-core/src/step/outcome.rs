/// Resultado terminal de ejecutar un step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Failed { message: String },
}

impl StepOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        StepOutcome::Failed { message: message.into() }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }
}
