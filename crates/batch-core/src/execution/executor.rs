use std::sync::Arc;

use super::ExecutionResult;
use crate::errors::ExecutionError;
use crate::params::ParameterSet;
use crate::step::StepHandle;
use crate::topology::Job;

/// Ejecutor externo que corre jobs completos o steps aislados.
///
/// Las llamadas son bloqueantes: devuelven un resultado terminal o un error.
/// Timeouts y reintentos, si existen, son responsabilidad del ejecutor.
pub trait JobExecutor: Send + Sync {
    fn run_job(&self, job: &Job, params: ParameterSet) -> Result<ExecutionResult, ExecutionError>;

    fn run_step(&self, step: &StepHandle, params: ParameterSet) -> Result<ExecutionResult, ExecutionError>;
}

impl<T: JobExecutor + ?Sized> JobExecutor for Arc<T> {
    fn run_job(&self, job: &Job, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        (**self).run_job(job, params)
    }

    fn run_step(&self, step: &StepHandle, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        (**self).run_step(step, params)
    }
}

impl<T: JobExecutor + ?Sized> JobExecutor for &T {
    fn run_job(&self, job: &Job, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        (**self).run_job(job, params)
    }

    fn run_step(&self, step: &StepHandle, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        (**self).run_step(step, params)
    }
}
