//! Avisos
//!
//! La página anfitriona dibuja los avisos con
//! `mostrarNotificacionRequest(titulo, mensaje, color, icono)`.

use serde::Serialize;

pub const MSG_NO_MATERIALS: &str = "No hay Materiales Agregados";
pub const MSG_MISSING_INFO: &str = "Falta Información";
pub const MSG_EMPTY_REPORT: &str = "Escribe un motivo para reportar";
pub const MSG_CONNECTIVITY: &str = "No se pudo conectar con el servidor";
pub const MSG_UNEXPECTED: &str = "Respuesta inesperada del servidor";
/// Sufijo del aviso de filas repetidas que no se cargaron
pub const MSG_SKIPPED_ROWS: &str = "materiales repetidos no se cargaron";

/// Elemento de alerta para materiales duplicados
pub const DUPLICATE_ALERT_ID: &str = "dialogCCAlerta";

/// Tiempo que permanece visible la alerta de duplicado
pub const DUPLICATE_ALERT_MS: u32 = 4000;

/// Tipo de aviso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Error => "Error",
            NoticeKind::Success => "Exito",
            NoticeKind::Info => "Notificación",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NoticeKind::Error => "crimson",
            NoticeKind::Success => "lawngreen",
            NoticeKind::Info => "#1c336c",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Error => "bug",
            NoticeKind::Success => "check",
            NoticeKind::Info => "bell",
        }
    }
}

/// Aviso visible para el usuario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub color: String,
    pub icon: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: message.into(),
            color: kind.color().to_string(),
            icon: kind.icon().to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    /// Falla de red o respuesta ilegible
    pub fn connectivity() -> Self {
        Self::error(MSG_CONNECTIVITY)
    }

    /// Estado de respuesta no esperado por el flujo
    pub fn unexpected() -> Self {
        Self::error(MSG_UNEXPECTED)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
