//! Tipos de error
//!
//! Todas las fallas de validación son locales: se convierten en un aviso
//! visible y nunca modifican el estado previo.

use thiserror::Error;

use crate::form::FormField;
use crate::ledger::EntryId;
use crate::notice::{Notice, MSG_CONNECTIVITY, MSG_EMPTY_REPORT, MSG_MISSING_INFO, MSG_NO_MATERIALS};

/// Errores del libro de selección
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("El material ya fue agregado: {name} ({quantity})")]
    Duplicate { name: String, quantity: String },

    #[error("El material ya fue agregado: {0}")]
    DuplicateName(String),

    #[error("Escribe un motivo para reportar")]
    EmptyComment,

    #[error("No hay material en espera de cantidad")]
    NothingStaged,

    #[error("No hay material pendiente")]
    NothingPending,

    #[error("Material desconocido: {0}")]
    UnknownEntry(EntryId),

    #[error("Formato de material inválido: '{0}'")]
    MalformedItem(String),
}

/// Errores de validación previos al envío
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Falta Información: {}", join_fields(.0))]
    MissingInformation(Vec<FormField>),

    #[error("No hay Materiales Agregados")]
    NoMaterials,

    #[error("Envío en curso")]
    AlreadyInFlight,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error común
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Respuesta inválida: {0}")]
    Protocol(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error de conexión: {0}")]
    Transport(String),

    #[cfg(not(feature = "wasm"))]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Aviso que se muestra al usuario para este error
    pub fn notice(&self) -> Notice {
        match self {
            Error::Ledger(LedgerError::EmptyComment) => Notice::error(MSG_EMPTY_REPORT),
            Error::Ledger(e) => Notice::info(e.to_string()),
            Error::Validation(ValidationError::MissingInformation(_)) => {
                Notice::info(MSG_MISSING_INFO)
            }
            Error::Validation(ValidationError::NoMaterials) => Notice::info(MSG_NO_MATERIALS),
            Error::Validation(e) => Notice::info(e.to_string()),
            Error::Protocol(_) | Error::Json(_) | Error::Transport(_) => {
                Notice::error(MSG_CONNECTIVITY)
            }
            #[cfg(not(feature = "wasm"))]
            Error::Io(e) => Notice::error(e.to_string()),
        }
    }
}

/// Resultado con el error común
pub type Result<T> = std::result::Result<T, Error>;
