//! Búsqueda en listas y tablas

use vales_common::filter::{self, FilterTarget, HideStrategy, EQUIPO, MAESTROS, SOLICITUDES};
use wasm_bindgen::prelude::*;

use crate::dom::{field_value, query_all, set_styles};

/// Muestra u oculta cada elemento según el texto del buscador
pub fn apply(target: &FilterTarget) {
    let query = field_value(target.input_id);
    apply_query(target.item_selector, &query, target.strategy);
}

fn apply_query(item_selector: &str, query: &str, strategy: HideStrategy) {
    for item in query_all(item_selector) {
        let text = item.text_content().unwrap_or_default();
        let visible = filter::matches(&text, query);
        set_styles(&item, strategy.styles(visible));
    }
}

/// Filtro genérico para otras listas de la plantilla
///
/// `item_selector` incluye el contenedor, p. ej. `"#equipoLista li"`.
#[wasm_bindgen(js_name = "filterItems")]
pub fn filter_items(item_selector: String, query: String, collapse: bool) {
    let strategy = if collapse {
        HideStrategy::Collapse
    } else {
        HideStrategy::Display
    };
    apply_query(&item_selector, &query, strategy);
}

/// Tabla de solicitudes del maestro
#[wasm_bindgen(js_name = "filterList")]
pub fn filter_list() {
    apply(&SOLICITUDES);
}

#[wasm_bindgen(js_name = "filterListEquipo")]
pub fn filter_list_equipo() {
    apply(&EQUIPO);
}

#[wasm_bindgen(js_name = "filterListTeacher")]
pub fn filter_list_teacher() {
    apply(&MAESTROS);
}
