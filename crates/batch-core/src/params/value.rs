use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Valor tipado de un parámetro de job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    String(String),
    Long(i64),
    Double(f64),
    Date(DateTime<Utc>),
}

impl ParameterValue {
    /// Nombre corto del tipo, usado en mensajes de error.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::String(_) => "string",
            ParameterValue::Long(_) => "long",
            ParameterValue::Double(_) => "double",
            ParameterValue::Date(_) => "date",
        }
    }

    /// Representación JSON estable (entra en el hash de identidad).
    pub(crate) fn to_identity_json(&self) -> Value {
        match self {
            ParameterValue::String(s) => json!({ "string": s }),
            ParameterValue::Long(n) => json!({ "long": n }),
            // JSON no admite NaN ni infinitos; van como texto para no colapsar en null
            ParameterValue::Double(d) if !d.is_finite() => json!({ "double": d.to_string() }),
            ParameterValue::Double(d) => json!({ "double": d }),
            ParameterValue::Date(d) => json!({ "date": d.to_rfc3339_opts(SecondsFormat::Millis, true) }),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::String(s) => write!(f, "{s}"),
            ParameterValue::Long(n) => write!(f, "{n}"),
            ParameterValue::Double(d) => write!(f, "{d}"),
            ParameterValue::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self { ParameterValue::String(v.to_string()) }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self { ParameterValue::String(v) }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self { ParameterValue::Long(v) }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self { ParameterValue::Double(v) }
}

impl From<DateTime<Utc>> for ParameterValue {
    fn from(v: DateTime<Utc>) -> Self { ParameterValue::Date(v) }
}

/// Parámetro de job: valor + si participa en la identidad de la instancia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: ParameterValue,
    #[serde(default = "identifying_default")]
    pub identifying: bool,
}

fn identifying_default() -> bool {
    true
}

impl Parameter {
    pub fn identifying(value: impl Into<ParameterValue>) -> Self {
        Self { value: value.into(),
               identifying: true }
    }

    pub fn non_identifying(value: impl Into<ParameterValue>) -> Self {
        Self { value: value.into(),
               identifying: false }
    }
}
