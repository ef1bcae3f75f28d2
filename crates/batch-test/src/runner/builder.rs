//! Builder para `JobTestRunner`.
//!
//! Los colaboradores se inyectan aquí y no cambian después de `build`.
//!
//! ```ignore
//! let runner = JobTestRunner::builder(job, InMemoryExecutor::new())
//!     .clock(Arc::new(FixedClock::new(0)))
//!     .eager_step_index(true)
//!     .build()?;
//! ```

use std::sync::Arc;

use batch_core::{Clock, Job, JobExecutor, ResolveError, StepResolver, SystemClock};

use super::JobTestRunner;
use crate::config::RunnerConfig;

pub struct JobTestRunnerBuilder<E: JobExecutor> {
    job: Job,
    executor: E,
    clock: Option<Arc<dyn Clock>>,
    config: RunnerConfig,
}

impl<E: JobExecutor> JobTestRunnerBuilder<E> {
    pub(super) fn new(job: Job, executor: E) -> Self {
        Self { job,
               executor,
               clock: None,
               config: RunnerConfig::default() }
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Reemplaza la configuración completa (p. ej. `RunnerConfig::from_env()`).
    pub fn config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn eager_step_index(mut self, eager: bool) -> Self {
        self.config.eager_step_index = eager;
        self
    }

    /// Construye el runner. Con índice eager, una topología lineal con nombres
    /// duplicados falla aquí con `DuplicateStepName`.
    pub fn build(self) -> Result<JobTestRunner<E>, ResolveError> {
        let resolver = StepResolver::new(self.job);
        if self.config.eager_step_index {
            resolver.warm()?;
        }
        Ok(JobTestRunner { executor: self.executor,
                           clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
                           config: self.config,
                           resolver })
    }
}
