use std::sync::{Mutex, MutexGuard};

use batch_core::{BatchStatus, ExecutionError, ExecutionResult, Job, JobExecutor, ParameterSet, StepHandle};

/// Llamada recibida por un `RecordingExecutor`.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Job { job_name: String, params: ParameterSet },
    Step { step: StepHandle, params: ParameterSet },
}

impl RecordedCall {
    pub fn params(&self) -> &ParameterSet {
        match self {
            RecordedCall::Job { params, .. } | RecordedCall::Step { params, .. } => params,
        }
    }
}

/// Doble de prueba: registra cada llamada y responde con un resultado fijo
/// (o con el error configurado).
#[derive(Debug)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    status: BatchStatus,
    failure: Option<ExecutionError>,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingExecutor {
    /// Responde `Completed` a todo.
    pub fn new() -> Self {
        Self { calls: Mutex::new(vec![]),
               status: BatchStatus::Completed,
               failure: None }
    }

    pub fn with_status(mut self, status: BatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Todas las llamadas fallan con `error` (pero se registran igual).
    pub fn failing_with(mut self, error: ExecutionError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond(&self, call: RecordedCall, job_name: &str) -> Result<ExecutionResult, ExecutionError> {
        let params = call.params().clone();
        let step_name = match &call {
            RecordedCall::Step { step, .. } => Some(step.name().to_string()),
            RecordedCall::Job { .. } => None,
        };
        self.lock().push(call);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let result = ExecutionResult::new(job_name, params, self.status);
        Ok(match step_name {
            Some(name) => result.with_step_name(name),
            None => result,
        })
    }
}

impl JobExecutor for RecordingExecutor {
    fn run_job(&self, job: &Job, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        let call = RecordedCall::Job { job_name: job.name().to_string(),
                                       params };
        self.respond(call, job.name())
    }

    fn run_step(&self, step: &StepHandle, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        let call = RecordedCall::Step { step: step.clone(),
                                        params };
        self.respond(call, step.name())
    }
}
