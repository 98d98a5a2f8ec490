use std::env;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "./data/gliders.json";
const DEFAULT_OPERATOR: &str = "operator";

/// Runtime settings of the binary, read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the JSON snapshot holding the glider tables.
    db_path: PathBuf,
    /// Dumps full glider records next to the computed sheet.
    debug: bool,
    /// Username written into audit events.
    operator: String,
}

impl Config {
    /// Builds the configuration from `GLIDER_DB_PATH`, `GLIDER_DEBUG` and `GLIDER_OPERATOR`,
    /// falling back to defaults for every unset variable.
    pub fn from_env() -> Self {
        let db_var = env::var("GLIDER_DB_PATH");
        let db_path = db_var.as_ref().map_or(DEFAULT_DB_PATH, |v| v.as_str());
        let debug = env::var("GLIDER_DEBUG").is_ok_and(|v| Self::parse_flag(&v));
        let operator_var = env::var("GLIDER_OPERATOR");
        let operator = operator_var.as_ref().map_or(DEFAULT_OPERATOR, |v| v.as_str());
        Self::new(PathBuf::from(db_path), debug, operator)
    }

    pub fn new(db_path: PathBuf, debug: bool, operator: &str) -> Self {
        Self { db_path, debug, operator: String::from(operator) }
    }

    pub fn db_path(&self) -> &PathBuf { &self.db_path }
    pub fn is_debug(&self) -> bool { self.debug }
    pub fn operator(&self) -> &str { &self.operator }

    fn parse_flag(value: &str) -> bool {
        matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
    }
}

impl Default for Config {
    fn default() -> Self { Self::new(PathBuf::from(DEFAULT_DB_PATH), false, DEFAULT_OPERATOR) }
}
