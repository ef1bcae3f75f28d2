//! Contratos de ejecución: estado, resultado y el ejecutor externo.

mod executor;
mod result;
mod status;

pub use executor::JobExecutor;
pub use result::{ExecutionResult, StepExecution};
pub use status::BatchStatus;
