//! Control de diálogos modales
//!
//! `DialogHost` abstrae el documento: en el navegador son elementos
//! `<dialog>`, en pruebas un documento en memoria. Abrir o cerrar un id
//! inexistente no es un error. El controlador no guarda estado: qué diálogo
//! está visible lo sabe el documento.

use tracing::debug;

/// Superficies modales que definen las páginas
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DialogId {
    Material,
    MaterialQuantity,
    Lab,
    Teacher,
    StudentCount,
    Room,
    Submit,
    ConfirmDeletion,
    Report,
    SolicitudInfo(String),
    SolicitudAccept(String),
    SolicitudCancel(String),
    /// Cualquier otro diálogo, por id de elemento
    Named(String),
}

impl DialogId {
    /// id del elemento en el documento
    pub fn element_id(&self) -> String {
        match self {
            DialogId::Material => "seleccionMaterial".to_string(),
            DialogId::MaterialQuantity => "seleccionCantidadMaterial".to_string(),
            DialogId::Lab => "seleccionLaboratorio".to_string(),
            DialogId::Teacher => "seleccionMaestro".to_string(),
            DialogId::StudentCount => "seleccionCantidad".to_string(),
            DialogId::Room => "seleccionSalon".to_string(),
            DialogId::Submit => "seleccionEnviar".to_string(),
            DialogId::ConfirmDeletion => "dialogConfirmarEliminacion".to_string(),
            DialogId::Report => "dialogReportarMaterial".to_string(),
            DialogId::SolicitudInfo(id) => format!("dialog-{}", id),
            DialogId::SolicitudAccept(id) => format!("dialog-accept-{}", id),
            DialogId::SolicitudCancel(id) => format!("dialog-cancel-{}", id),
            DialogId::Named(id) => id.clone(),
        }
    }

    /// Los tres diálogos que acompañan a una fila de solicitud
    pub fn solicitud_dialogs(id: &str) -> [DialogId; 3] {
        [
            DialogId::SolicitudInfo(id.to_string()),
            DialogId::SolicitudAccept(id.to_string()),
            DialogId::SolicitudCancel(id.to_string()),
        ]
    }
}

/// Documento que contiene los diálogos
///
/// Cada operación devuelve `false` cuando el elemento no existe. El
/// usuario puede cerrar un diálogo por fuera (Esc), así que `show_modal`
/// consulta el estado real y no vuelve a abrir uno ya visible.
pub trait DialogHost {
    fn show_modal(&self, element_id: &str) -> bool;
    fn close(&self, element_id: &str) -> bool;
    fn remove(&self, element_id: &str) -> bool;
    fn is_open(&self, element_id: &str) -> bool;
}

pub struct DialogController<H: DialogHost> {
    host: H,
}

impl<H: DialogHost> DialogController<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn open(&self, dialog: DialogId) {
        let element_id = dialog.element_id();
        if self.host.show_modal(&element_id) {
            debug!(dialog = %element_id, "diálogo abierto");
        }
    }

    /// Cierra si está visible; cerrar uno cerrado no toca el documento
    pub fn close(&self, dialog: &DialogId) {
        let element_id = dialog.element_id();
        if self.host.is_open(&element_id) {
            self.host.close(&element_id);
            debug!(dialog = %element_id, "diálogo cerrado");
        }
    }

    pub fn is_open(&self, dialog: &DialogId) -> bool {
        self.host.is_open(&dialog.element_id())
    }

    /// Quita del documento los diálogos de una solicitud ya atendida
    pub fn remove_solicitud_dialogs(&self, id: &str) {
        for dialog in DialogId::solicitud_dialogs(id) {
            self.close(&dialog);
            self.host.remove(&dialog.element_id());
        }
    }
}
