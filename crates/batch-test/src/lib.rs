//! batch-test: utilidades para lanzar jobs y steps desde tests.
//!
//! - `runner`: `JobTestRunner` y su builder.
//! - `executor`: ejecutores en memoria y de registro.
//! - `config`: configuración del runner desde el entorno.

pub mod config;
pub mod executor;
pub mod runner;

pub use config::{ConfigError, RunnerConfig};
pub use executor::{InMemoryExecutor, RecordedCall, RecordingExecutor};
pub use runner::{JobTestRunner, JobTestRunnerBuilder, LaunchError};
