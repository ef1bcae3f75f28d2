//! `JobTestRunner`: lanza un job completo o uno de sus steps desde un test.
//!
//! El runner no ejecuta nada: resuelve el step por nombre (cuando se pide uno)
//! y delega en el `JobExecutor` inyectado. Cuando el llamador no aporta
//! parámetros, genera un set único a partir del reloj para que cada
//! lanzamiento sea una instancia nueva del job.
//!
//! Dos lanzamientos sin parámetros dentro del mismo milisegundo producen la
//! misma identidad; el ejecutor los verá como la misma instancia.

mod builder;

use std::sync::Arc;

use batch_core::{Clock, ExecutionError, ExecutionResult, Job, JobExecutor, JobTopology, ParameterSet,
                 ParameterValue, ResolveError, StepHandle, StepResolver, SystemClock};
use log::debug;
use thiserror::Error;

use crate::config::RunnerConfig;

pub use builder::JobTestRunnerBuilder;

/// Error de `launch_step*`: o no se resolvió el step, o falló el ejecutor.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LaunchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

#[derive(Debug)]
pub struct JobTestRunner<E: JobExecutor> {
    executor: E,
    clock: Arc<dyn Clock>,
    config: RunnerConfig,
    resolver: StepResolver,
}

impl<E: JobExecutor> JobTestRunner<E> {
    /// Runner con reloj de sistema y configuración por defecto. El índice de
    /// steps se construye en la primera resolución.
    pub fn new(job: Job, executor: E) -> Self {
        Self { executor,
               clock: Arc::new(SystemClock),
               config: RunnerConfig::default(),
               resolver: StepResolver::new(job) }
    }

    pub fn builder(job: Job, executor: E) -> JobTestRunnerBuilder<E> {
        JobTestRunnerBuilder::new(job, executor)
    }

    pub fn job(&self) -> &Job {
        self.resolver.job()
    }

    pub fn topology(&self) -> &JobTopology {
        self.job().topology()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Lanza el job completo con parámetros únicos.
    pub fn launch_job(&self) -> Result<ExecutionResult, ExecutionError> {
        self.launch_job_with(self.make_unique_parameters())
    }

    /// Lanza el job completo con `params`. Los errores del ejecutor se
    /// propagan sin reintentos.
    pub fn launch_job_with(&self, params: ParameterSet) -> Result<ExecutionResult, ExecutionError> {
        debug!("launching job [{}] (instance {})", self.job().name(), params.identity_key());
        self.executor.run_job(self.job(), params)
    }

    /// Lanza sólo el step `step_name` con parámetros únicos.
    pub fn launch_step(&self, step_name: &str) -> Result<ExecutionResult, LaunchError> {
        self.launch_step_with(step_name, self.make_unique_parameters())
    }

    /// Resuelve `step_name` y lo lanza con `params`. Si la resolución falla el
    /// ejecutor no se invoca.
    pub fn launch_step_with(&self, step_name: &str, params: ParameterSet) -> Result<ExecutionResult, LaunchError> {
        let step = self.step(step_name)?;
        debug!("launching step [{step_name}] of job [{}] (instance {})",
               self.job().name(),
               params.identity_key());
        Ok(self.executor.run_step(&step, params)?)
    }

    /// Resuelve un step por nombre sin lanzarlo.
    pub fn step(&self, step_name: &str) -> Result<StepHandle, ResolveError> {
        self.resolver.resolve(step_name)
    }

    /// Set con una única entrada: la clave configurada (por defecto
    /// `"timestamp"`) con los milisegundos actuales del reloj.
    pub fn make_unique_parameters(&self) -> ParameterSet {
        std::iter::once((self.config.unique_key.clone(), ParameterValue::Long(self.clock.now_millis()))).collect()
    }
}
