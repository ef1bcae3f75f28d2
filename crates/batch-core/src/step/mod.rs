//! Definiciones relacionadas a Steps.
//!
//! Un Step es la unidad ejecutable con nombre dentro de un job. Para el core
//! es opaco: sólo se consulta su nombre al resolverlo, y sólo un ejecutor lo
//! corre. Este módulo define:
//! - `Step`: interfaz neutral que implementan los pasos.
//! - `StepContext`: lo que recibe un step al ejecutarse.
//! - `StepOutcome`: resultado terminal de una ejecución.
//! - `FnStep`: adaptador de closures, útil en tests.

mod definition;
mod fn_step;
mod outcome;

pub use definition::{Step, StepContext, StepHandle};
pub use fn_step::FnStep;
pub use outcome::StepOutcome;
