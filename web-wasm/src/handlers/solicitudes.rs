//! Solicitudes de firma del maestro

use vales_common::{DialogId, Flow, Identificacion, SignatureRequest};
use wasm_bindgen::prelude::*;

use crate::api::submit;
use crate::dom::{by_id, js_value_to_identificacion, remove_by_id};
use crate::handlers::dialogs::{close, open};
use crate::state::with_page;

fn row_id(id: &str) -> String {
    format!("solicitud-{}", id)
}

fn with_id(id: &JsValue, f: impl FnOnce(Identificacion)) {
    match js_value_to_identificacion(id) {
        Some(id) => f(id),
        None => gloo::console::warn!(format!("id de solicitud inválido: {:?}", id)),
    }
}

#[wasm_bindgen(js_name = "openDialogInfo")]
pub fn open_dialog_info(id: JsValue) {
    with_id(&id, |id| open(DialogId::SolicitudInfo(id.to_string())));
}

#[wasm_bindgen(js_name = "closeDialogInfo")]
pub fn close_dialog_info(id: JsValue) {
    with_id(&id, |id| close(DialogId::SolicitudInfo(id.to_string())));
}

#[wasm_bindgen(js_name = "openDialogAceptar")]
pub fn open_dialog_aceptar(id: JsValue) {
    with_id(&id, |id| open(DialogId::SolicitudAccept(id.to_string())));
}

#[wasm_bindgen(js_name = "closeDialogAceptar")]
pub fn close_dialog_aceptar(id: JsValue) {
    with_id(&id, |id| close(DialogId::SolicitudAccept(id.to_string())));
}

#[wasm_bindgen(js_name = "openDialogCancelar")]
pub fn open_dialog_cancelar(id: JsValue) {
    with_id(&id, |id| open(DialogId::SolicitudCancel(id.to_string())));
}

#[wasm_bindgen(js_name = "closeDialogCancelar")]
pub fn close_dialog_cancelar(id: JsValue) {
    with_id(&id, |id| close(DialogId::SolicitudCancel(id.to_string())));
}

/// Quita la fila atendida y sus tres diálogos
fn on_solicitud_resolved(key: &str) {
    remove_by_id(&row_id(key));
    with_page(|s| s.dialogs.remove_solicitud_dialogs(key));
}

/// Envía la decisión; con `alerta` la fila y sus diálogos se quitan
fn decide(flow: Flow, identificacion: Identificacion) {
    let key = identificacion.to_string();
    if by_id(&row_id(&key)).is_none() {
        gloo::console::warn!(format!("no existe la fila {}", row_id(&key)));
        return;
    }

    let body = SignatureRequest { identificacion };
    submit(flow, key.clone(), body, move || on_solicitud_resolved(&key));
}

#[wasm_bindgen(js_name = "aceptarSolicitud")]
pub fn aceptar_solicitud(id: JsValue) {
    with_id(&id, |id| decide(Flow::AcceptSolicitud, id));
}

#[wasm_bindgen(js_name = "cancelarSolicitud")]
pub fn cancelar_solicitud(id: JsValue) {
    with_id(&id, |id| decide(Flow::CancelSolicitud, id));
}
