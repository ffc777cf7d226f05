//! Envío de peticiones al servidor
//!
//! Una sola petición `POST` por acción. La respuesta se resuelve con
//! `vales_common::resolve`, que también cubre fallos de red y estados
//! desconocidos.

use serde::Serialize;
use vales_common::{resolve, Error, Flow, Notice, Outcome, ServerReply, NOTIFICATION_KEY};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::bridge::notify;
use crate::state::with_page;

/// POST con cuerpo JSON a una ruta del mismo origen
async fn post_json_js(path: &str, body: &str) -> Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(path, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("sin window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    JsFuture::from(resp.json()?).await
}

/// Envía el cuerpo al endpoint del flujo y lee la respuesta
pub async fn post_json<T: Serialize>(flow: Flow, body: &T) -> Result<ServerReply, Error> {
    let body = serde_json::to_string(body)?;
    let json = post_json_js(flow.path(), &body)
        .await
        .map_err(|e| Error::Transport(format!("{:?}", e)))?;
    let value: serde_json::Value = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Protocol(e.to_string()))?;
    ServerReply::from_value(value)
}

/// Lanza el envío sin bloquear la página
///
/// `key` distingue envíos del mismo flujo (id de solicitud o vale). Mientras
/// haya uno en curso con la misma clave, los demás se ignoran.
/// `on_resolved` se llama cuando una solicitud queda atendida (`alerta`).
pub fn submit<T, F>(flow: Flow, key: String, body: T, on_resolved: F)
where
    T: Serialize + 'static,
    F: FnOnce() + 'static,
{
    if with_page(|s| s.guard.begin(flow, &key)).is_err() {
        gloo::console::warn!(format!("{} ya está en curso", flow.path()));
        return;
    }

    spawn_local(async move {
        let reply = post_json(flow, &body).await;
        with_page(|s| s.guard.finish(flow, &key));
        apply(&Browser, resolve(flow, reply), on_resolved);
    });
}

/// Lo que una respuesta puede hacerle a la página
pub trait PageEffects {
    fn notify(&self, notice: &Notice);
    fn store_message(&self, key: &str, mensaje: &str);
    fn navigate(&self, url: &str);
}

/// Efectos sobre el documento real
pub struct Browser;

impl PageEffects for Browser {
    fn notify(&self, notice: &Notice) {
        notify(notice);
    }

    fn store_message(&self, key: &str, mensaje: &str) {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, mensaje) {
                    gloo::console::warn!(format!("sessionStorage: {:?}", e));
                }
            }
            None => gloo::console::warn!("sessionStorage no disponible"),
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            gloo::console::error!(format!("navegación a '{}' falló: {:?}", url, e));
        }
    }
}

/// Aplica la reacción decidida por `resolve`
///
/// Con `redirect` el mensaje se guarda antes de navegar.
pub fn apply<E: PageEffects>(effects: &E, outcome: Outcome, on_resolved: impl FnOnce()) {
    match outcome {
        Outcome::Notify(notice) => effects.notify(&notice),
        Outcome::SolicitudResolved(notice) => {
            on_resolved();
            effects.notify(&notice);
        }
        Outcome::Redirect { mensaje, url } => {
            effects.store_message(NOTIFICATION_KEY, &mensaje);
            effects.navigate(&url);
        }
    }
}
