use indexmap::IndexMap;

use crate::step::StepHandle;

/// Estado que envuelve un step ejecutable.
#[derive(Debug, Clone)]
pub struct StepState {
    step: StepHandle,
}

impl StepState {
    pub fn new(step: StepHandle) -> Self {
        Self { step }
    }

    pub fn step(&self) -> &StepHandle {
        &self.step
    }
}

/// Nodo del grafo de flujo. Sólo `Step` es ejecutable; el resto son nodos de
/// control que el ejecutor interpreta y el core sólo reconoce.
#[derive(Debug, Clone)]
pub enum State {
    Step(StepState),
    Decision,
    Split,
    End,
}

impl State {
    pub fn as_step(&self) -> Option<&StepHandle> {
        match self {
            State::Step(s) => Some(s.step()),
            _ => None,
        }
    }
}

/// Grafo de estados indexado por nombre. Conserva el orden de inserción.
#[derive(Debug, Clone, Default)]
pub struct GraphTopology {
    states: IndexMap<String, State>,
}

impl GraphTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un estado. Si el nombre ya existe se reemplaza en su posición.
    pub fn with_state(mut self, name: impl Into<String>, state: State) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    /// Añade un step bajo su propio nombre.
    pub fn with_step(self, step: StepHandle) -> Self {
        let name = step.name().to_string();
        self.with_state(name, State::Step(StepState::new(step)))
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    pub fn states(&self) -> impl Iterator<Item = (&str, &State)> {
        self.states.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn step_states(&self) -> impl Iterator<Item = (&str, &StepHandle)> {
        self.states.iter().filter_map(|(k, s)| s.as_step().map(|step| (k.as_str(), step)))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
