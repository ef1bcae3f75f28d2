//! Parámetros de job.
//!
//! Un `ParameterSet` cumple dos papeles: es la entrada de una ejecución y la
//! identidad de la instancia del job. Dos sets iguales denotan la misma
//! instancia a efectos de reinicio, por eso el tipo es inmutable una vez
//! construido y su igualdad no depende del orden de inserción.

mod builder;
mod value;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ParameterError;
use crate::hashing::hash_value;

pub use builder::ParametersBuilder;
pub use value::{Parameter, ParameterValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: BTreeMap<String, Parameter>,
}

impl ParameterSet {
    /// Set vacío.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Claves en orden lexicográfico.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn parameter(&self, key: &str) -> Option<&Parameter> {
        self.entries.get(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.entries.get(key).map(|p| &p.value)
    }

    pub fn get_string(&self, key: &str) -> Result<Option<&str>, ParameterError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParameterValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(mismatch(key, "string", other)),
        }
    }

    pub fn get_long(&self, key: &str) -> Result<Option<i64>, ParameterError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParameterValue::Long(n)) => Ok(Some(*n)),
            Some(other) => Err(mismatch(key, "long", other)),
        }
    }

    pub fn get_double(&self, key: &str) -> Result<Option<f64>, ParameterError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParameterValue::Double(d)) => Ok(Some(*d)),
            Some(other) => Err(mismatch(key, "double", other)),
        }
    }

    pub fn get_date(&self, key: &str) -> Result<Option<DateTime<Utc>>, ParameterError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParameterValue::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(mismatch(key, "date", other)),
        }
    }

    /// Sólo los parámetros que participan en la identidad.
    pub fn identifying(&self) -> ParameterSet {
        let entries = self.entries
                          .iter()
                          .filter(|(_, p)| p.identifying)
                          .map(|(k, p)| (k.clone(), p.clone()))
                          .collect();
        ParameterSet { entries }
    }

    /// Clave de identidad de la instancia: hash canónico de los parámetros
    /// identificantes. Los no identificantes no la alteran.
    pub fn identity_key(&self) -> String {
        let mut obj = Map::new();
        for (k, p) in self.entries.iter().filter(|(_, p)| p.identifying) {
            obj.insert(k.clone(), p.value.to_identity_json());
        }
        hash_value(&Value::Object(obj))
    }
}

fn mismatch(key: &str, expected: &'static str, actual: &ParameterValue) -> ParameterError {
    ParameterError::TypeMismatch { key: key.to_string(),
                                   expected,
                                   actual: actual.type_name() }
}

/// Construcción directa sin validación de claves; todos identificantes.
impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter()
                          .map(|(k, v)| (k.into(), Parameter::identifying(v)))
                          .collect();
        ParameterSet { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let a: ParameterSet = vec![("run", "1"), ("env", "ci")].into_iter().collect();
        let b: ParameterSet = vec![("env", "ci"), ("run", "1")].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.identity_key(), b.identity_key());
    }

    #[test]
    fn typed_getter_reports_mismatch() {
        let p: ParameterSet = std::iter::once(("run", "1")).collect();
        assert_eq!(p.get_string("run").unwrap(), Some("1"));
        assert_eq!(p.get_long("missing").unwrap(), None);
        let err = p.get_long("run").unwrap_err();
        assert!(matches!(err, ParameterError::TypeMismatch { expected: "long", actual: "string", .. }));
    }

    #[test]
    fn identity_key_differs_by_value_type() {
        let s: ParameterSet = std::iter::once(("n", "1")).collect();
        let l: ParameterSet = std::iter::once(("n", 1i64)).collect();
        assert_ne!(s, l);
        assert_ne!(s.identity_key(), l.identity_key());
    }

    #[test]
    fn serializes_as_plain_map() {
        let p: ParameterSet = std::iter::once(("timestamp", 5i64)).collect();
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["timestamp"]["value"]["value"], 5);
        assert_eq!(v["timestamp"]["identifying"], true);
    }
}
