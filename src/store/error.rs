use strum_macros::Display;

/// Failures of loading or editing the fleet records.
#[derive(Debug, Display)]
pub enum StoreError {
    #[strum(to_string = "cannot read glider records: {source}")]
    Io { source: std::io::Error },
    #[strum(to_string = "malformed glider records: {source}")]
    Parse { source: serde_json::Error },
    #[strum(to_string = "unknown registration {registration}")]
    UnknownRegistration { registration: String },
    #[strum(to_string = "invalid {table} record {key}: {reason}")]
    InvalidRecord { table: &'static str, key: String, reason: String },
    #[strum(to_string = "registration {registration} already exists")]
    DuplicateRegistration { registration: String },
    #[strum(to_string = "glider {registration} has no weighing #{id}")]
    UnknownWeighing { registration: String, id: u32 },
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(source: std::io::Error) -> Self { StoreError::Io { source } }
}

impl From<serde_json::Error> for StoreError {
    fn from(source: serde_json::Error) -> Self { StoreError::Parse { source } }
}
