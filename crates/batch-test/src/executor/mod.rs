//! Ejecutores listos para usar en tests.
//!
//! - `InMemoryExecutor`: corre los steps en proceso y recuerda qué instancias
//!   ya completaron, para ejercitar la semántica de reinicio.
//! - `RecordingExecutor`: no ejecuta nada; registra las llamadas recibidas.

mod in_memory;
mod recording;

pub use in_memory::InMemoryExecutor;
pub use recording::{RecordedCall, RecordingExecutor};
