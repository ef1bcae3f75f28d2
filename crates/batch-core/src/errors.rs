//! Errores del core: resolución de steps, ejecución delegada y parámetros.
//!
//! Ninguno de estos errores se reintenta ni se registra dentro del core; se
//! devuelven al llamador tal cual.

use thiserror::Error;

/// Fallos al resolver un step por nombre dentro de una topología.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ResolveError {
    /// El nombre no existe en la topología.
    #[error("No Step found with name: [{name}]")]
    StepNotFound { name: String },
    /// El nombre existe pero el nodo no es un step ejecutable.
    #[error("named entity [{name}] exists but is not an executable step")]
    InvalidTopology { name: String },
    /// Dos steps de una topología lineal comparten nombre.
    #[error("duplicate step name in linear topology: [{name}]")]
    DuplicateStepName { name: String },
    /// La topología no es lineal ni grafo.
    #[error("job [{job}] is neither a linear step sequence nor a flow graph")]
    UnsupportedTopology { job: String },
}

/// Envoltorio opaco de los fallos del ejecutor.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ExecutionError {
    #[error("job execution already running: {job} (instance {instance})")]
    AlreadyRunning { job: String, instance: String },
    #[error("job instance already complete: {job} (instance {instance})")]
    InstanceAlreadyComplete { job: String, instance: String },
    #[error("invalid job parameters: {0}")]
    Validation(String),
    #[error("executor infrastructure failure: {0}")]
    Infrastructure(String),
}

/// Errores al construir o leer un `ParameterSet`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParameterError {
    #[error("parameter key must not be empty")]
    EmptyKey,
    #[error("parameter [{key}] is a {actual}, expected {expected}")]
    TypeMismatch { key: String, expected: &'static str, actual: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_not_found_names_the_step() {
        let e = ResolveError::StepNotFound { name: "export".into() };
        assert_eq!(e.to_string(), "No Step found with name: [export]");
    }

    #[test]
    fn invalid_topology_message() {
        let e = ResolveError::InvalidTopology { name: "decision".into() };
        assert!(e.to_string().contains("not an executable step"));
    }

    #[test]
    fn type_mismatch_message() {
        let e = ParameterError::TypeMismatch { key: "run".into(),
                                               expected: "long",
                                               actual: "string" };
        assert_eq!(e.to_string(), "parameter [run] is a string, expected long");
    }
}
