//! Acceso al documento
//!
//! Envolturas delgadas sobre `web_sys`. Un elemento ausente nunca es error:
//! las funciones devuelven `None`/`false` y el llamador decide.

use gloo::timers::callback::Timeout;
use vales_common::notice::{DUPLICATE_ALERT_ID, DUPLICATE_ALERT_MS};
use vales_common::{DialogHost, Identificacion};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlDialogElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Elementos que cumplen un selector CSS
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Texto del elemento sin espacios sobrantes
pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default().trim().to_string()
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in styles {
        if let Err(e) = style.set_property(property, value) {
            gloo::console::warn!(format!("estilo '{}' rechazado: {:?}", property, e));
        }
    }
}

/// Valor de un input o textarea por id; vacío si no existe
pub fn field_value(id: &str) -> String {
    let Some(element) = by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn set_field_value(id: &str, value: &str) {
    let Some(element) = by_id(id) else {
        return;
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Quita un elemento del documento si existe
pub fn remove_by_id(id: &str) -> bool {
    match by_id(id) {
        Some(element) => {
            element.remove();
            true
        }
        None => false,
    }
}

/// Muestra la alerta de material repetido y la oculta después de 4 s
pub fn flash_duplicate_alert() {
    let Some(alert) = html_by_id(DUPLICATE_ALERT_ID) else {
        return;
    };
    set_styles(&alert, &[("display", "flex")]);
    Timeout::new(DUPLICATE_ALERT_MS, move || {
        set_styles(&alert, &[("display", "none")]);
    })
    .forget();
}

/// Variable global que la plantilla deja en la página
pub fn page_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

/// Id tal como lo dio la página: número entero o texto sin convertir
pub fn js_value_to_identificacion(value: &JsValue) -> Option<Identificacion> {
    if let Some(s) = value.as_string() {
        return Some(Identificacion::Text(s));
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0)
        .map(|n| Identificacion::Number(n as i64))
}

/// Diálogos `<dialog>` del documento
#[derive(Debug, Default, Clone, Copy)]
pub struct WebDocument;

fn dialog_by_id(id: &str) -> Option<HtmlDialogElement> {
    by_id(id)?.dyn_into::<HtmlDialogElement>().ok()
}

impl DialogHost for WebDocument {
    fn show_modal(&self, element_id: &str) -> bool {
        let Some(dialog) = dialog_by_id(element_id) else {
            return false;
        };
        if dialog.open() {
            return true;
        }
        match dialog.show_modal() {
            Ok(()) => true,
            Err(e) => {
                gloo::console::warn!(format!("showModal '{}' falló: {:?}", element_id, e));
                false
            }
        }
    }

    fn close(&self, element_id: &str) -> bool {
        match dialog_by_id(element_id) {
            Some(dialog) => {
                dialog.close();
                true
            }
            None => false,
        }
    }

    fn remove(&self, element_id: &str) -> bool {
        remove_by_id(element_id)
    }

    fn is_open(&self, element_id: &str) -> bool {
        dialog_by_id(element_id).is_some_and(|dialog| dialog.open())
    }
}

/// Fragmentos de página para pruebas
#[cfg(test)]
pub mod fixture {
    use super::*;

    /// Inserta `html` en un `<div>` nuevo al final del `<body>`
    pub fn mount(html: &str) -> HtmlElement {
        let document = document().expect("sin document");
        let host: HtmlElement = document
            .create_element("div")
            .expect("create_element")
            .dyn_into()
            .expect("div");
        host.set_inner_html(html);
        document.body().expect("sin body").append_child(&host).expect("append_child");
        host
    }

    /// Deja correr las tareas pendientes (efectos de Leptos, microtareas)
    pub async fn tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
}
