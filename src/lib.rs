//! batchflow-rust
//!
//! Fachada de los crates del workspace:
//! - `batch_core`: jobs, steps, topologías, parámetros y resolución de steps.
//! - `batch_test`: `JobTestRunner` y ejecutores para tests.

pub use batch_core;
pub use batch_test;

pub use batch_core::{BatchStatus, ExecutionError, ExecutionResult, FnStep, GraphTopology, Job, JobExecutor,
                     JobTopology, ParameterSet, ParametersBuilder, ResolveError, State, Step, StepContext, StepOutcome};
pub use batch_test::{InMemoryExecutor, JobTestRunner, LaunchError, RecordingExecutor, RunnerConfig};
