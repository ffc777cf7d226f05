//! Edición de vales existentes (activos y de maestro)

use vales_common::{check_edit, DialogId, Error, Flow, Notice, ValeEditRequest};
use wasm_bindgen::prelude::*;

use crate::api::submit;
use crate::bridge::notify;
use crate::dom::{js_value_to_identificacion, page_global};
use crate::state::with_page;

/// Variable que la plantilla de edición define con el id del vale
const VALE_ID_GLOBAL: &str = "identificacionSolicitud";

#[wasm_bindgen(js_name = "openDialogEnviarEditar")]
pub fn open_dialog_enviar_editar() {
    let result = with_page(|s| {
        let checked = check_edit(&s.ledger);
        if checked.is_ok() {
            s.dialogs.open(DialogId::Submit);
        }
        checked
    });
    if let Err(e) = result {
        notify(&Error::from(e).notice());
    }
}

fn send_edit(flow: Flow) {
    let Some(identificacion) = page_global(VALE_ID_GLOBAL).and_then(|v| js_value_to_identificacion(&v))
    else {
        gloo::console::error!(format!("la página no define {}", VALE_ID_GLOBAL));
        notify(&Notice::unexpected());
        return;
    };

    let key = identificacion.to_string();
    let body = with_page(|s| {
        check_edit(&s.ledger)?;
        Ok::<_, vales_common::ValidationError>(ValeEditRequest::from_ledger(identificacion, &s.ledger))
    });

    match body {
        Ok(body) => submit(flow, key, body, || {}),
        Err(e) => notify(&Error::from(e).notice()),
    }
}

/// Guarda los cambios de un vale activo
#[wasm_bindgen(js_name = "enviarValeEditar")]
pub fn enviar_vale_editar() {
    send_edit(Flow::EditActiveVale);
}

/// Guarda los cambios de un vale de maestro
#[wasm_bindgen(js_name = "enviarValeEditarMaestro")]
pub fn enviar_vale_editar_maestro() {
    send_edit(Flow::EditTeacherVale);
}
