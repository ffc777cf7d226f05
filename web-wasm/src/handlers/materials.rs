//! Selección, eliminación y reporte de materiales

use vales_common::notice::MSG_EMPTY_REPORT;
use vales_common::{DialogId, EntryId, LedgerError, Notice};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::bridge::notify;
use crate::dom::{by_id, field_value, flash_duplicate_alert, set_field_value, text_of};
use crate::state::{render, with_page};

/// id del textarea del motivo de reporte
pub const REPORT_TEXT_ID: &str = "textoReporte";

fn on_ledger_error(error: &LedgerError) {
    match error {
        LedgerError::Duplicate { .. } | LedgerError::DuplicateName(_) => flash_duplicate_alert(),
        LedgerError::EmptyComment => notify(&Notice::error(MSG_EMPTY_REPORT)),
        other => {
            gloo::console::warn!(other.to_string());
            notify(&Notice::error(other.to_string()));
        }
    }
}

/// Material de la lista libre: se guarda el nombre y se pide la cantidad
#[wasm_bindgen(js_name = "selectMaterial")]
pub fn select_material(element: Element) {
    let name = text_of(&element);
    let result = with_page(|s| {
        let staged = s.ledger.stage_custom(&name);
        if staged.is_ok() {
            s.dialogs.open(DialogId::MaterialQuantity);
        }
        staged
    });
    if let Err(e) = result {
        on_ledger_error(&e);
    }
}

/// Cantidad elegida para el material en espera
#[wasm_bindgen(js_name = "selectMaterialCantidad")]
pub fn select_material_cantidad(element: Element) {
    let quantity = text_of(&element);
    let result = with_page(|s| {
        let added = s.ledger.confirm_quantity(&quantity);
        s.dialogs.close(&DialogId::Material);
        s.dialogs.close(&DialogId::MaterialQuantity);
        added
    });
    match result {
        Ok(_) => render(),
        Err(e) => on_ledger_error(&e),
    }
}

/// Material predefinido con texto `"nombre:cantidad"`
///
/// Si ya está en la tabla se muestra la alerta y el diálogo sigue abierto.
#[wasm_bindgen(js_name = "selectMaterialPredefinido")]
pub fn select_material_predefinido(element: Element) {
    let text = element.text_content().unwrap_or_default();
    let result = with_page(|s| {
        let added = s.ledger.add_predefined_text(&text);
        if added.is_ok() {
            s.dialogs.close(&DialogId::Material);
        }
        added
    });
    match result {
        Ok(_) => render(),
        Err(e) => on_ledger_error(&e),
    }
}

#[wasm_bindgen(js_name = "closeDialogMaterial")]
pub fn close_dialog_material() {
    with_page(|s| {
        s.ledger.cancel_staged();
        s.dialogs.close(&DialogId::Material);
    });
}

#[wasm_bindgen(js_name = "closeQuantityDialog")]
pub fn close_quantity_dialog() {
    with_page(|s| {
        s.ledger.cancel_staged();
        s.dialogs.close(&DialogId::Material);
        s.dialogs.close(&DialogId::MaterialQuantity);
    });
}

/// Botón "X" de una fila de la tabla
///
/// Con diálogo de confirmación (páginas de edición) se pide confirmar y se
/// ofrece reportar; sin él (registro nuevo) se elimina directo.
pub fn on_delete_clicked(id: EntryId) {
    let confirm_id = DialogId::ConfirmDeletion.element_id();
    if by_id(&confirm_id).is_none() {
        let removed = with_page(|s| s.ledger.remove(id));
        match removed {
            Ok(_) => render(),
            Err(e) => on_ledger_error(&e),
        }
        return;
    }

    let result = with_page(|s| {
        let requested = s.ledger.request_removal(id);
        if requested.is_ok() {
            s.dialogs.open(DialogId::ConfirmDeletion);
        }
        requested
    });
    if let Err(e) = result {
        on_ledger_error(&e);
    }
}

#[wasm_bindgen(js_name = "confirmarEliminacion")]
pub fn confirmar_eliminacion() {
    let removed = with_page(|s| {
        let removed = s.ledger.confirm_removal();
        s.dialogs.close(&DialogId::ConfirmDeletion);
        removed
    });
    if removed.is_some() {
        render();
    }
}

/// Abre el diálogo de reporte con el motivo en blanco
#[wasm_bindgen(js_name = "abrirDialogReportar")]
pub fn abrir_dialog_reportar() {
    set_field_value(REPORT_TEXT_ID, "");
    with_page(|s| s.dialogs.open(DialogId::Report));
}

/// Reporta el material pendiente con el motivo escrito
#[wasm_bindgen(js_name = "enviarReporteMaterial")]
pub fn enviar_reporte_material() {
    let comment = field_value(REPORT_TEXT_ID);
    let result = with_page(|s| {
        let reported = s.ledger.report(&comment).map(|r| r.name.clone());
        if reported.is_ok() {
            s.dialogs.close(&DialogId::Report);
            s.dialogs.close(&DialogId::ConfirmDeletion);
        }
        reported
    });
    match result {
        Ok(name) => {
            gloo::console::log!(format!("material reportado: {}", name));
            render();
        }
        Err(e) => on_ledger_error(&e),
    }
}
