//! Builder de `ParameterSet`.
//!
//! Acumula entradas y valida en `build`. Si una clave se repite gana la última.

use chrono::{DateTime, Utc};

use super::{Parameter, ParameterSet, ParameterValue};
use crate::errors::ParameterError;

#[derive(Debug, Clone, Default)]
pub struct ParametersBuilder {
    entries: Vec<(String, Parameter)>,
}

impl ParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parte de un set existente (p. ej. para añadir parámetros a uno único).
    pub fn from_set(set: &ParameterSet) -> Self {
        let entries = set.iter().map(|(k, p)| (k.to_string(), p.clone())).collect();
        Self { entries }
    }

    pub fn add(mut self, key: impl Into<String>, value: impl Into<ParameterValue>, identifying: bool) -> Self {
        self.entries.push((key.into(), Parameter { value: value.into(), identifying }));
        self
    }

    pub fn add_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, ParameterValue::String(value.into()), true)
    }

    pub fn add_long(self, key: impl Into<String>, value: i64) -> Self {
        self.add(key, ParameterValue::Long(value), true)
    }

    pub fn add_double(self, key: impl Into<String>, value: f64) -> Self {
        self.add(key, ParameterValue::Double(value), true)
    }

    pub fn add_date(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.add(key, ParameterValue::Date(value), true)
    }

    /// Parámetro de entrada que no altera la identidad de la instancia.
    pub fn add_non_identifying(self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.add(key, value, false)
    }

    pub fn build(self) -> Result<ParameterSet, ParameterError> {
        let mut set = ParameterSet::new();
        for (key, param) in self.entries {
            if key.trim().is_empty() {
                return Err(ParameterError::EmptyKey);
            }
            set.entries.insert(key, param);
        }
        Ok(set)
    }
}
