//! Topologías de job.
//!
//! Un job organiza sus steps de dos formas conocidas: una secuencia lineal
//! ordenada o un grafo de estados con nombre. La forma se decide al construir
//! el `Job` y no cambia después; `Opaque` representa jobs cuya estructura no se
//! puede inspeccionar (no se pueden resolver steps en ellos).

mod graph;
mod linear;

pub use graph::{GraphTopology, State, StepState};
pub use linear::LinearTopology;

use crate::step::StepHandle;

#[derive(Debug, Clone)]
pub enum JobTopology {
    Linear(LinearTopology),
    Graph(GraphTopology),
    Opaque,
}

impl JobTopology {
    /// Nombre corto de la variante, para logs.
    pub fn kind(&self) -> &'static str {
        match self {
            JobTopology::Linear(_) => "linear",
            JobTopology::Graph(_) => "graph",
            JobTopology::Opaque => "opaque",
        }
    }
}

impl From<LinearTopology> for JobTopology {
    fn from(t: LinearTopology) -> Self { JobTopology::Linear(t) }
}

impl From<GraphTopology> for JobTopology {
    fn from(t: GraphTopology) -> Self { JobTopology::Graph(t) }
}

/// Job con nombre y topología inmutable.
#[derive(Debug, Clone)]
pub struct Job {
    name: String,
    topology: JobTopology,
}

impl Job {
    pub fn new(name: impl Into<String>, topology: impl Into<JobTopology>) -> Self {
        Self { name: name.into(),
               topology: topology.into() }
    }

    /// Atajo para un job lineal.
    pub fn linear(name: impl Into<String>, steps: Vec<StepHandle>) -> Self {
        Self::new(name, LinearTopology::new(steps))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn topology(&self) -> &JobTopology {
        &self.topology
    }

    /// Steps ejecutables en orden de declaración. Vacío para `Opaque`.
    pub fn executable_steps(&self) -> Vec<StepHandle> {
        match &self.topology {
            JobTopology::Linear(l) => l.steps().to_vec(),
            JobTopology::Graph(g) => g.step_states().map(|(_, s)| s.clone()).collect(),
            JobTopology::Opaque => vec![],
        }
    }
}
