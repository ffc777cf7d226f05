use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValesError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("Archivo inválido: {0}")]
    InvalidDraft(String),

    #[error(transparent)]
    Common(#[from] vales_common::Error),

    #[error("Error HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Envío cancelado")]
    Cancelled,
}

impl From<vales_common::LedgerError> for ValesError {
    fn from(e: vales_common::LedgerError) -> Self {
        ValesError::Common(e.into())
    }
}

impl From<vales_common::ValidationError> for ValesError {
    fn from(e: vales_common::ValidationError) -> Self {
        ValesError::Common(e.into())
    }
}

pub type Result<T> = std::result::Result<T, ValesError>;
