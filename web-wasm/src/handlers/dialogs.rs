//! Apertura y cierre directos de diálogos

use vales_common::DialogId;
use wasm_bindgen::prelude::*;

use crate::state::with_page;

pub fn open(dialog: DialogId) {
    with_page(|s| s.dialogs.open(dialog));
}

pub fn close(dialog: DialogId) {
    with_page(|s| s.dialogs.close(&dialog));
}

/// Cierra un diálogo por id de elemento
#[wasm_bindgen(js_name = "cerrarDialog")]
pub fn cerrar_dialog(id: String) {
    close(DialogId::Named(id));
}

#[wasm_bindgen(js_name = "openDialogMaterial")]
pub fn open_dialog_material() {
    open(DialogId::Material);
}

#[wasm_bindgen(js_name = "openDialogLab")]
pub fn open_dialog_lab() {
    open(DialogId::Lab);
}

#[wasm_bindgen(js_name = "closeDialogLab")]
pub fn close_dialog_lab() {
    close(DialogId::Lab);
}

#[wasm_bindgen(js_name = "openDialogTeacher")]
pub fn open_dialog_teacher() {
    open(DialogId::Teacher);
}

#[wasm_bindgen(js_name = "closeDialogTeacher")]
pub fn close_dialog_teacher() {
    close(DialogId::Teacher);
}

#[wasm_bindgen(js_name = "openDialogCantidad")]
pub fn open_dialog_cantidad() {
    open(DialogId::StudentCount);
}

#[wasm_bindgen(js_name = "closeDialogCantidad")]
pub fn close_dialog_cantidad() {
    close(DialogId::StudentCount);
}

#[wasm_bindgen(js_name = "openDialogSalon")]
pub fn open_dialog_salon() {
    open(DialogId::Room);
}

#[wasm_bindgen(js_name = "closeDialogSalon")]
pub fn close_dialog_salon() {
    close(DialogId::Room);
}

#[wasm_bindgen(js_name = "closeDialogEnviar")]
pub fn close_dialog_enviar() {
    close(DialogId::Submit);
}

#[wasm_bindgen(js_name = "openDialogReportar")]
pub fn open_dialog_reportar() {
    open(DialogId::Report);
}

#[wasm_bindgen(js_name = "closeDialogReportar")]
pub fn close_dialog_reportar() {
    close(DialogId::Report);
}
