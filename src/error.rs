use serde::Serialize;

/// App-wide error type. Every fallible service function returns
/// `Result<T, AppError>` and commands pass it straight through.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),
}

/// Tauri requires `Serialize` on command return errors.
/// Serialized as `{ error: "...", kind: "..." }` for frontend consumption.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("AppError", 2)?;
        s.serialize_field("error", &self.to_string())?;
        s.serialize_field(
            "kind",
            match self {
                AppError::Io(_) => "io",
                AppError::Serde(_) => "serde",
                AppError::NotFound(_) => "not_found",
                AppError::Validation(_) => "validation",
                AppError::Storage(_) => "storage",
                AppError::InvalidBackup(_) => "invalid_backup",
            },
        )?;
        s.end()
    }
}
