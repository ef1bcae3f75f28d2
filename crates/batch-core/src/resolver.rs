//! Resolución de steps por nombre.
//!
//! `StepResolver` traduce un nombre a un `StepHandle` sobre cualquiera de las
//! topologías conocidas:
//! - Grafo: consulta directa del mapa de estados (ya indexado por nombre).
//! - Lineal: construye una sola vez un `StepIndex` recorriendo la secuencia y
//!   lo reutiliza en llamadas posteriores.
//!
//! El índice se publica con `OnceCell`: ante llamadas concurrentes se construye
//! una vez y todos observan el índice completo o ninguno. Si la construcción
//! falla (nombres duplicados) no se publica nada y cada llamada repite el
//! mismo error.
//!
//! Cada resolver es dueño de su `Job`; el runner crea uno por job.

use std::collections::HashMap;

use log::trace;
use once_cell::sync::OnceCell;

use crate::errors::ResolveError;
use crate::step::StepHandle;
use crate::topology::{Job, JobTopology, LinearTopology, State};

/// Índice nombre -> step de una topología lineal.
#[derive(Debug)]
pub struct StepIndex {
    steps: HashMap<String, StepHandle>,
}

impl StepIndex {
    /// Recorre la secuencia una vez. Falla con `DuplicateStepName` ante el
    /// primer nombre repetido.
    pub fn build(topology: &LinearTopology) -> Result<Self, ResolveError> {
        let mut steps = HashMap::with_capacity(topology.len());
        for step in topology.steps() {
            let name = step.name().to_string();
            if steps.contains_key(&name) {
                return Err(ResolveError::DuplicateStepName { name });
            }
            steps.insert(name, step.clone());
        }
        Ok(Self { steps })
    }

    pub fn get(&self, name: &str) -> Option<&StepHandle> {
        self.steps.get(name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Resolver ligado a un job. El índice lineal sólo describe ese job, así que
/// nunca se consulta con otra topología.
#[derive(Debug)]
pub struct StepResolver {
    job: Job,
    index: OnceCell<StepIndex>,
}

impl StepResolver {
    pub fn new(job: Job) -> Self {
        Self { job,
               index: OnceCell::new() }
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Devuelve el step con nombre exactamente `name` (sensible a mayúsculas,
    /// sin recortes).
    pub fn resolve(&self, name: &str) -> Result<StepHandle, ResolveError> {
        match self.job.topology() {
            JobTopology::Graph(graph) => match graph.state(name) {
                None => Err(ResolveError::StepNotFound { name: name.to_string() }),
                Some(State::Step(state)) => Ok(state.step().clone()),
                Some(_) => Err(ResolveError::InvalidTopology { name: name.to_string() }),
            },
            JobTopology::Linear(linear) => {
                let index = self.index_for(linear)?;
                index.get(name)
                     .cloned()
                     .ok_or_else(|| ResolveError::StepNotFound { name: name.to_string() })
            }
            JobTopology::Opaque => Err(ResolveError::UnsupportedTopology { job: self.job.name().to_string() }),
        }
    }

    /// Construye el índice por adelantado si la topología es lineal. Para el
    /// resto no hay nada que preparar.
    pub fn warm(&self) -> Result<(), ResolveError> {
        if let JobTopology::Linear(linear) = self.job.topology() {
            self.index_for(linear)?;
        }
        Ok(())
    }

    /// Indica si el índice lineal ya fue publicado.
    pub fn is_indexed(&self) -> bool {
        self.index.get().is_some()
    }

    fn index_for(&self, linear: &LinearTopology) -> Result<&StepIndex, ResolveError> {
        self.index.get_or_try_init(|| {
                      let index = StepIndex::build(linear)?;
                      trace!("step index for job [{}] built with {} steps", self.job.name(), index.len());
                      Ok(index)
                  })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::FnStep;
    use crate::topology::GraphTopology;
    use std::sync::Arc;

    fn linear(name: &str, steps: &[&str]) -> StepResolver {
        let steps = steps.iter().map(|n| FnStep::noop(*n).into_handle()).collect();
        StepResolver::new(Job::linear(name, steps))
    }

    #[test]
    fn linear_lookup_is_exact() {
        let r = linear("etl", &["load", "validate", "export"]);
        assert_eq!(r.resolve("validate").unwrap().name(), "validate");
        assert!(matches!(r.resolve("Validate"), Err(ResolveError::StepNotFound { .. })));
        assert!(matches!(r.resolve(" validate"), Err(ResolveError::StepNotFound { .. })));
    }

    #[test]
    fn repeated_resolution_returns_same_handle() {
        let r = linear("etl", &["load", "export"]);
        let a = r.resolve("export").unwrap();
        let b = r.resolve("export").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn resolvers_of_different_jobs_do_not_share_an_index() {
        let a = linear("a", &["load"]);
        let b = linear("b", &["export"]);
        assert_eq!(a.resolve("load").unwrap().name(), "load");
        assert_eq!(b.resolve("export").unwrap().name(), "export");
        assert_eq!(b.resolve("load").unwrap_err(), ResolveError::StepNotFound { name: "load".into() });
        assert_eq!(a.resolve("export").unwrap_err(), ResolveError::StepNotFound { name: "export".into() });
    }

    #[test]
    fn duplicate_names_fail_every_time_and_publish_nothing() {
        let r = linear("etl", &["load", "load"]);
        let expected = ResolveError::DuplicateStepName { name: "load".into() };
        assert_eq!(r.resolve("load").unwrap_err(), expected);
        assert_eq!(r.resolve("other").unwrap_err(), expected);
        assert!(!r.is_indexed());
    }

    #[test]
    fn graph_non_step_state_is_invalid() {
        let g = GraphTopology::new().with_state("decision", State::Decision)
                                    .with_step(FnStep::noop("load").into_handle());
        let r = StepResolver::new(Job::new("flow", g));
        assert_eq!(r.resolve("load").unwrap().name(), "load");
        assert_eq!(r.resolve("decision").unwrap_err(),
                   ResolveError::InvalidTopology { name: "decision".into() });
        assert_eq!(r.resolve("missing").unwrap_err(),
                   ResolveError::StepNotFound { name: "missing".into() });
        assert!(!r.is_indexed());
    }

    #[test]
    fn opaque_is_unsupported_and_names_the_job() {
        let r = StepResolver::new(Job::new("custom", JobTopology::Opaque));
        let err = r.resolve("x").unwrap_err();
        assert_eq!(err, ResolveError::UnsupportedTopology { job: "custom".into() });
        assert!(err.to_string().contains("[custom]"));
        assert!(r.warm().is_ok());
    }

    #[test]
    fn warm_builds_linear_index() {
        let r = linear("etl", &["a"]);
        r.warm().unwrap();
        assert!(r.is_indexed());
    }
}
