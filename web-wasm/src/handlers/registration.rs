//! Registro nuevo de vale

use vales_common::{DialogId, Error, Flow, FormDraft, RegistroRequest, ValidationError};
use wasm_bindgen::prelude::*;

use crate::api::submit;
use crate::bridge::notify;
use crate::dom::field_value;
use crate::handlers::materials::REPORT_TEXT_ID;
use crate::state::with_page;

fn read_draft() -> FormDraft {
    FormDraft::read_with(field_value)
}

/// Valida el formulario y abre la confirmación de envío
#[wasm_bindgen(js_name = "openDialogEnviarRegistro")]
pub fn open_dialog_enviar_registro() {
    let draft = read_draft();
    let result = with_page(|s| {
        let checked = draft.validate(&s.ledger);
        if checked.is_ok() {
            s.dialogs.open(DialogId::Submit);
        }
        checked
    });
    if let Err(e) = result {
        notify(&Error::from(e).notice());
    }
}

/// Cuerpo del registro con el formulario y la tabla actuales
fn registro_body() -> Result<RegistroRequest, ValidationError> {
    let draft = read_draft();
    let reporte = field_value(REPORT_TEXT_ID);
    with_page(|s| {
        draft.validate(&s.ledger)?;
        Ok(RegistroRequest::new(draft, &reporte, &s.ledger))
    })
}

/// Envía el registro; sin datos completos no sale ninguna petición
#[wasm_bindgen(js_name = "enviarRegistro")]
pub fn enviar_registro() {
    match registro_body() {
        Ok(body) => submit(Flow::Register, String::new(), body, || {}),
        Err(e) => notify(&Error::from(e).notice()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use crate::state;
    use vales_common::FormField;
    use wasm_bindgen_test::*;

    fn formulario(grupo: &str) -> String {
        format!(
            r#"
            <input id="valeControlInput" value="20231234">
            <input id="valeNombreInput" value="Ana López">
            <input id="valeMateriaInput" value="Química">
            <input id="valeGrupoInput" value="{}">
            <input id="valeLabInput" value="Laboratorio 2">
            <input id="valeTeacherInput" value="Dr. Ruiz">
            <input id="valeNumInput" value="4">
            <input id="valeSalonInput" value="L-201">
            <textarea id="textoReporte"> Sin novedad </textarea>
            "#,
            grupo
        )
    }

    #[wasm_bindgen_test]
    fn test_empty_field_blocks_request() {
        state::reset();
        with_page(|s| s.ledger.add_predefined("Bureta", "1")).expect("alta");
        let page = fixture::mount(&formulario(""));

        assert_eq!(
            registro_body(),
            Err(ValidationError::MissingInformation(vec![FormField::Grupo]))
        );
        enviar_registro();
        assert!(!with_page(|s| s.guard.is_in_flight(Flow::Register, "")));
        page.remove();
    }

    #[wasm_bindgen_test]
    fn test_complete_form_builds_body() {
        state::reset();
        with_page(|s| s.ledger.add_predefined("Bureta", "1")).expect("alta");
        let page = fixture::mount(&formulario("3B"));

        let body = registro_body().expect("formulario completo");
        assert_eq!(body.draft.grupo, "3B");
        assert_eq!(body.reporte, "Sin novedad");
        assert_eq!(body.items, vec![["Bureta".to_string(), "1".to_string()]]);
        page.remove();
    }

    #[wasm_bindgen_test]
    fn test_form_without_materials() {
        state::reset();
        let page = fixture::mount(&formulario("3B"));
        assert_eq!(registro_body(), Err(ValidationError::NoMaterials));
        page.remove();
    }
}
