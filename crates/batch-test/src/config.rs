//! Configuración del runner desde variables de entorno.
//!
//! Convención `BATCH_TEST_*`. El archivo `.env` se carga una sola vez si
//! existe; su ausencia no es error.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Clave por defecto del parámetro de unicidad.
pub const DEFAULT_UNIQUE_KEY: &str = "timestamp";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Construir el índice de steps al crear el runner en vez de en la
    /// primera resolución.
    pub eager_step_index: bool,
    /// Clave del parámetro generado por `make_unique_parameters`.
    pub unique_key: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { eager_step_index: false,
               unique_key: DEFAULT_UNIQUE_KEY.to_string() }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Igual que `from_env` pero con una fuente arbitraria (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("BATCH_TEST_EAGER_STEP_INDEX") {
            cfg.eager_step_index = parse_bool("BATCH_TEST_EAGER_STEP_INDEX", &v)?;
        }
        if let Some(v) = lookup("BATCH_TEST_UNIQUE_KEY") {
            if v.trim().is_empty() {
                return Err(ConfigError::Invalid { var: "BATCH_TEST_UNIQUE_KEY", value: v });
            }
            cfg.unique_key = v;
        }
        Ok(cfg)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: value.to_string() }),
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
