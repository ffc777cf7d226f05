//! Tabla de materiales seleccionados (`.seccionMTabla`)

use leptos::prelude::*;
use vales_common::LedgerEntry;

use crate::handlers::materials::on_delete_clicked;

/// Proyección del libro de selección
///
/// Conserva el marcado de la plantilla (`seccionMTCasilla` / `seccionMTValor`)
/// para que el CSS existente siga aplicando.
#[component]
pub fn MaterialTable(entries: RwSignal<Vec<LedgerEntry>>) -> impl IntoView {
    view! {
        <For
            each=move || entries.get()
            key=|entry| entry.id
            children=move |entry: LedgerEntry| {
                let id = entry.id;
                view! {
                    <div class="seccionMTCasilla">
                        <div class="seccionMTValor">
                            <h5>{entry.material.name.clone()}</h5>
                            <span>{entry.material.quantity.clone()}</span>
                        </div>
                        <button on:click=move |_| on_delete_clicked(id)>"X"</button>
                    </div>
                }
            }
        />
    }
}
