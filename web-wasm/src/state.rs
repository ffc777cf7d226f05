//! Estado de la página
//!
//! Un único `PageState` por documento reemplaza las variables globales de
//! los scripts: libro de selección, diálogos abiertos y envíos en curso.
//! La tabla de materiales se dibuja desde `view`, que se actualiza con
//! `render()` después de cada cambio del libro.

use std::cell::RefCell;

use leptos::prelude::*;
use vales_common::{DialogController, LedgerEntry, SelectionLedger, SubmitGuard};

use crate::dom::WebDocument;

pub struct PageState {
    pub ledger: SelectionLedger,
    pub dialogs: DialogController<WebDocument>,
    pub guard: SubmitGuard,
    /// Proyección de la tabla; `None` si la página no tiene tabla de materiales
    pub view: Option<RwSignal<Vec<LedgerEntry>>>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            ledger: SelectionLedger::new(),
            dialogs: DialogController::new(WebDocument),
            guard: SubmitGuard::new(),
            view: None,
        }
    }
}

thread_local! {
    static PAGE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// Ejecuta `f` con el estado de la página
///
/// No anidar: `f` no debe volver a llamar a `with_page`.
pub fn with_page<U>(f: impl FnOnce(&mut PageState) -> U) -> U {
    PAGE.with(|page| f(&mut page.borrow_mut()))
}

/// Actualiza la tabla con el contenido actual del libro
pub fn render() {
    let (view, entries) = with_page(|s| (s.view, s.ledger.entries().to_vec()));
    if let Some(view) = view {
        view.set(entries);
    }
}

/// Estado limpio entre pruebas
#[cfg(test)]
pub fn reset() {
    with_page(|s| *s = PageState::default());
}
