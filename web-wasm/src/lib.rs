//! Vales Web (Leptos + WASM)
//!
//! Código de cliente para las páginas de vales: diálogos, búsqueda en listas,
//! selección de materiales y envío al servidor. Las plantillas llaman a los
//! manejadores exportados en `handlers` con los nombres de siempre
//! (`selectMaterial`, `enviarValeEditar`, ...).

mod api;
mod bridge;
mod components;
mod dom;
pub mod handlers;
mod state;

use leptos::prelude::*;
use vales_common::{LedgerEntry, Notice};
use vales_common::notice::MSG_SKIPPED_ROWS;
use wasm_bindgen::prelude::*;

use crate::components::material_table::MaterialTable;

/// Contenedor de la tabla de materiales en las plantillas
const TABLE_SELECTOR: &str = ".seccionMTabla";
const ROW_SELECTOR: &str = ".seccionMTabla .seccionMTCasilla";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let Some(container) = dom::query_one(TABLE_SELECTOR) else {
        return;
    };

    seed_from_document();
    mount_table(container);
}

/// Reemplaza el contenido del contenedor por la tabla del libro
fn mount_table(container: web_sys::HtmlElement) {
    container.set_inner_html("");

    let entries = RwSignal::new(Vec::<LedgerEntry>::new());
    state::with_page(|s| s.view = Some(entries));
    state::render();

    leptos::mount::mount_to(container, move || view! { <MaterialTable entries=entries /> }).forget();
}

/// Carga al libro los materiales que el servidor ya dibujó (páginas de edición)
///
/// Una fila que repite un par ya cargado no entra al libro; se avisa cuántas
/// se omitieron porque la tabla se vuelve a dibujar sin ellas.
fn seed_from_document() {
    let rows: Vec<(String, String)> = dom::query_all(ROW_SELECTOR)
        .iter()
        .map(|row| {
            let cell = |selector: &str| {
                row.query_selector(selector)
                    .ok()
                    .flatten()
                    .map(|e| dom::text_of(&e))
                    .unwrap_or_default()
            };
            (cell("h5"), cell("span"))
        })
        .collect();

    let skipped = state::with_page(|s| {
        rows.iter()
            .filter(|(name, quantity)| match s.ledger.add_predefined(name, quantity) {
                Ok(_) => false,
                Err(e) => {
                    gloo::console::warn!(format!("fila omitida: {}", e));
                    true
                }
            })
            .count()
    });
    gloo::console::debug!(format!("{} materiales cargados", rows.len() - skipped));

    if skipped > 0 {
        bridge::notify(&Notice::info(format!("{} {}", skipped, MSG_SKIPPED_ROWS)));
    }
}

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
