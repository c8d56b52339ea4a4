use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuelSubsidyError {
    #[error("Invalid tariff: {field} — {reason}")]
    InvalidTariff { field: String, reason: String },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FuelSubsidyError {
    fn from(e: serde_json::Error) -> Self {
        FuelSubsidyError::SerializationError(e.to_string())
    }
}
