//! batch-core: jobs, steps, parámetros y resolución de steps por nombre.
//!
//! El core no ejecuta nada por sí mismo: describe la forma de un job
//! (`JobTopology`), la identidad de una ejecución (`ParameterSet`) y el
//! contrato del ejecutor externo (`JobExecutor`).
pub mod clock;
pub mod errors;
pub mod execution;
pub mod hashing;
pub mod params;
pub mod resolver;
pub mod step;
pub mod topology;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ExecutionError, ParameterError, ResolveError};
pub use execution::{BatchStatus, ExecutionResult, JobExecutor, StepExecution};
pub use params::{Parameter, ParameterSet, ParameterValue, ParametersBuilder};
pub use resolver::{StepIndex, StepResolver};
pub use step::{FnStep, Step, StepContext, StepHandle, StepOutcome};
pub use topology::{GraphTopology, Job, JobTopology, LinearTopology, State, StepState};
