//! Puente con las funciones JavaScript de la página
//!
//! `mostrarNotificacionRequest` la define el script global de la plantilla.

use vales_common::Notice;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Dibuja un aviso flotante
    ///
    /// # Arguments
    /// * `title` - Título ("Error", "Exito", "Notificación")
    /// * `message` - Texto del aviso
    /// * `color` - Color CSS del aviso
    /// * `icon` - Nombre del icono
    #[wasm_bindgen(js_name = "mostrarNotificacionRequest", catch)]
    fn mostrar_notificacion_js(
        title: &str,
        message: &str,
        color: &str,
        icon: &str,
    ) -> Result<(), JsValue>;
}

/// Muestra un aviso; si la página no define la función se deja en consola
pub fn notify(notice: &Notice) {
    if let Err(e) = mostrar_notificacion_js(&notice.title, &notice.message, &notice.color, &notice.icon) {
        gloo::console::error!(format!("{} ({:?})", notice, e));
    }
}
