//! Protocolo con el servidor
//!
//! Todas las peticiones son `POST` con cuerpo JSON. La respuesta trae
//! `status` y `mensaje`; `redirect` agrega `url`.
//!
//! | Flujo | Endpoint | Éxito |
//! |---|---|---|
//! | Aceptar solicitud | `/maestro/firma/aceptar` | `alerta` |
//! | Cancelar solicitud | `/maestro/firma/cancelar` | `alerta` |
//! | Editar vale activo | `/casetero/vales/activos/editado` | `redirect` |
//! | Editar vale de maestro | `/casetero/vales/maestros/editado` | `redirect` |
//! | Registro nuevo | `/casetero/registros/nuevo/agregar` | `redirect` |

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::form::FormDraft;
use crate::ledger::SelectionLedger;
use crate::notice::Notice;

/// Clave de `sessionStorage` que consume la página destino
pub const NOTIFICATION_KEY: &str = "notificacion_mensaje";

/// Flujos de envío
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    AcceptSolicitud,
    CancelSolicitud,
    EditActiveVale,
    EditTeacherVale,
    Register,
}

/// Estados de éxito posibles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessKind {
    Alerta,
    Redirect,
}

impl Flow {
    pub fn path(&self) -> &'static str {
        match self {
            Flow::AcceptSolicitud => "/maestro/firma/aceptar",
            Flow::CancelSolicitud => "/maestro/firma/cancelar",
            Flow::EditActiveVale => "/casetero/vales/activos/editado",
            Flow::EditTeacherVale => "/casetero/vales/maestros/editado",
            Flow::Register => "/casetero/registros/nuevo/agregar",
        }
    }

    pub fn success(&self) -> SuccessKind {
        match self {
            Flow::AcceptSolicitud | Flow::CancelSolicitud => SuccessKind::Alerta,
            Flow::EditActiveVale | Flow::EditTeacherVale | Flow::Register => SuccessKind::Redirect,
        }
    }
}

/// Identificador de solicitud o vale
///
/// Se envía con el tipo que trae la página: número o texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identificacion {
    Number(i64),
    Text(String),
}

impl Identificacion {
    /// Id escrito a mano (argumento de la CLI)
    ///
    /// Sólo es número si su forma canónica coincide con el texto:
    /// `"0012"` y `"+5"` siguen siendo texto.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Identificacion::Number(n),
            _ => Identificacion::Text(raw.to_string()),
        }
    }
}

impl From<i64> for Identificacion {
    fn from(n: i64) -> Self {
        Identificacion::Number(n)
    }
}

impl From<String> for Identificacion {
    fn from(s: String) -> Self {
        Identificacion::Text(s)
    }
}

impl std::fmt::Display for Identificacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identificacion::Number(n) => write!(f, "{}", n),
            Identificacion::Text(s) => f.write_str(s),
        }
    }
}

/// Cuerpo de aceptar/cancelar solicitud
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureRequest {
    pub identificacion: Identificacion,
}

/// Cuerpo de edición de vale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValeEditRequest {
    pub identificacion: Identificacion,
    pub materiales: Vec<[String; 2]>,
    pub reportados: Vec<[String; 3]>,
}

impl ValeEditRequest {
    pub fn from_ledger(identificacion: Identificacion, ledger: &SelectionLedger) -> Self {
        Self {
            identificacion,
            materiales: ledger.serialize(),
            reportados: ledger.serialize_reported(),
        }
    }
}

/// Cuerpo del registro nuevo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistroRequest {
    #[serde(flatten)]
    pub draft: FormDraft,
    pub reporte: String,
    pub items: Vec<[String; 2]>,
}

impl RegistroRequest {
    pub fn new(draft: FormDraft, reporte: &str, ledger: &SelectionLedger) -> Self {
        Self {
            draft,
            reporte: reporte.trim().to_string(),
            items: ledger.serialize(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawReply {
    status: String,
    #[serde(default)]
    mensaje: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Respuesta del servidor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    Error { mensaje: String },
    Alerta { mensaje: String },
    Redirect { mensaje: String, url: String },
    Unknown { status: String },
}

impl ServerReply {
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawReply = serde_json::from_str(body)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawReply = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawReply) -> Result<Self> {
        let mensaje = |status: &str| {
            raw.mensaje
                .clone()
                .ok_or_else(|| Error::Protocol(format!("'{}' sin mensaje", status)))
        };
        match raw.status.as_str() {
            "error" => Ok(ServerReply::Error { mensaje: mensaje("error")? }),
            "alerta" => Ok(ServerReply::Alerta { mensaje: mensaje("alerta")? }),
            "redirect" => {
                let url = raw
                    .url
                    .clone()
                    .ok_or_else(|| Error::Protocol("'redirect' sin url".into()))?;
                Ok(ServerReply::Redirect { mensaje: mensaje("redirect")?, url })
            }
            other => Ok(ServerReply::Unknown { status: other.to_string() }),
        }
    }
}

/// Reacción de la interfaz a una respuesta
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sólo mostrar un aviso; el estado no cambia
    Notify(Notice),
    /// Quitar la fila de la solicitud y sus diálogos, luego avisar
    SolicitudResolved(Notice),
    /// Guardar el mensaje para la página destino y navegar
    Redirect { mensaje: String, url: String },
}

/// Decide la reacción a partir de la respuesta o del fallo de transporte
pub fn resolve(flow: Flow, reply: Result<ServerReply>) -> Outcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            warn!(endpoint = flow.path(), error = %e, "fallo de transporte");
            return Outcome::Notify(Notice::connectivity());
        }
    };

    match (reply, flow.success()) {
        (ServerReply::Error { mensaje }, _) => Outcome::Notify(Notice::error(mensaje)),
        (ServerReply::Alerta { mensaje }, SuccessKind::Alerta) => {
            Outcome::SolicitudResolved(Notice::success(mensaje))
        }
        (ServerReply::Redirect { mensaje, url }, SuccessKind::Redirect) => {
            Outcome::Redirect { mensaje, url }
        }
        (other, _) => {
            warn!(endpoint = flow.path(), reply = ?other, "respuesta inesperada");
            Outcome::Notify(Notice::unexpected())
        }
    }
}
