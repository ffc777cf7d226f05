//! Selectores de laboratorio, maestro, alumnos y salón
//!
//! Cada selector escribe el texto elegido en su input y cierra el diálogo;
//! la variante "cancelada" limpia el input.

use vales_common::{DialogId, FormField};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{html_by_id, set_field_value, set_styles, text_of};
use crate::state::{render, with_page};

/// Botón que abre el selector de materiales
const ADD_MATERIAL_BUTTON_ID: &str = "botonAbrirMaterial";

const PICKED_STYLE: &[(&str, &str)] = &[("color", "#333"), ("font-weight", "500")];

fn pick(field: FormField, dialog: DialogId, element: &Element) {
    let input_id = field.input_id();
    set_field_value(input_id, &text_of(element));
    if let Some(input) = html_by_id(input_id) {
        set_styles(&input, PICKED_STYLE);
    }
    with_page(|s| s.dialogs.close(&dialog));
}

fn cancel(field: FormField, dialog: DialogId) {
    set_field_value(field.input_id(), "");
    with_page(|s| s.dialogs.close(&dialog));
}

#[wasm_bindgen(js_name = "selectLab")]
pub fn select_lab(element: Element) {
    pick(FormField::Vale, DialogId::Lab, &element);
}

#[wasm_bindgen(js_name = "closeDialogLabCancelada")]
pub fn close_dialog_lab_cancelada() {
    cancel(FormField::Vale, DialogId::Lab);
}

#[wasm_bindgen(js_name = "selectTeacher")]
pub fn select_teacher(element: Element) {
    pick(FormField::Profesor, DialogId::Teacher, &element);
}

#[wasm_bindgen(js_name = "closeDialogTeacherCancelada")]
pub fn close_dialog_teacher_cancelada() {
    cancel(FormField::Profesor, DialogId::Teacher);
}

#[wasm_bindgen(js_name = "selectCantidad")]
pub fn select_cantidad(element: Element) {
    pick(FormField::Alumnos, DialogId::StudentCount, &element);
}

#[wasm_bindgen(js_name = "closeDialogCantidadCancelada")]
pub fn close_dialog_cantidad_cancelada() {
    cancel(FormField::Alumnos, DialogId::StudentCount);
}

/// Salón elegido: los materiales dependen del salón, la tabla se vacía
#[wasm_bindgen(js_name = "selectSalon")]
pub fn select_salon(element: Element) {
    with_page(|s| s.ledger.clear());
    render();
    pick(FormField::Laboratorio, DialogId::Room, &element);
    if let Some(button) = html_by_id(ADD_MATERIAL_BUTTON_ID) {
        set_styles(&button, &[("display", "flex")]);
    }
}

#[wasm_bindgen(js_name = "closeDialogSalonCancelada")]
pub fn close_dialog_salon_cancelada() {
    with_page(|s| s.ledger.clear());
    render();
    cancel(FormField::Laboratorio, DialogId::Room);
}
