use serde::{Deserialize, Serialize};

/// Estado de una ejecución de job o step.
///
/// `Started` es el único estado no terminal; un `ExecutionResult` devuelto
/// al llamador siempre lleva un estado terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Started,
    Completed,
    Failed,
    Stopped,
    Unknown,
}

impl BatchStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, BatchStatus::Started)
    }

    /// Una instancia en este estado puede relanzarse con los mismos parámetros.
    pub fn is_restartable(&self) -> bool {
        matches!(self, BatchStatus::Failed | BatchStatus::Stopped | BatchStatus::Unknown)
    }
}
