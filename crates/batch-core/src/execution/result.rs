use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BatchStatus;
use crate::params::ParameterSet;

/// Resultado de un step dentro de una ejecución.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepExecution {
    pub step_name: String,
    pub status: BatchStatus,
    pub exit_description: String,
}

/// Resultado de un lanzamiento. Se crea por llamada y se entrega al llamador;
/// el runner no lo retiene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub id: Uuid,
    pub job_name: String,
    /// Presente cuando se lanzó un único step.
    pub step_name: Option<String>,
    pub status: BatchStatus,
    pub exit_description: String,
    pub parameters: ParameterSet,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub step_executions: Vec<StepExecution>,
}

impl ExecutionResult {
    pub fn new(job_name: impl Into<String>, parameters: ParameterSet, status: BatchStatus) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(),
               job_name: job_name.into(),
               step_name: None,
               status,
               exit_description: String::new(),
               parameters,
               started_at: now,
               finished_at: now,
               step_executions: vec![] }
    }

    pub fn with_step_name(mut self, step_name: impl Into<String>) -> Self {
        self.step_name = Some(step_name.into());
        self
    }

    pub fn with_exit_description(mut self, description: impl Into<String>) -> Self {
        self.exit_description = description.into();
        self
    }

    pub fn with_step_executions(mut self, steps: Vec<StepExecution>) -> Self {
        self.step_executions = steps;
        self
    }

    pub fn with_times(mut self, started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self.finished_at = finished_at;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == BatchStatus::Completed
    }

    pub fn step_execution(&self, step_name: &str) -> Option<&StepExecution> {
        self.step_executions.iter().find(|s| s.step_name == step_name)
    }
}
