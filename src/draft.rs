//! Archivos de entrada de la CLI
//!
//! - Edición de vale: `{ "materiales": [[n, c]], "reportados": [[n, c, motivo]] }`
//! - Registro nuevo: campos del formulario, `reporte` e `items`
//!
//! Los archivos tienen la misma forma que los cuerpos que envía la página.

use crate::error::{Result, ValesError};
use serde::Deserialize;
use std::path::Path;
use vales_common::{FormDraft, Identificacion, RegistroRequest, SelectionLedger, ValeEditRequest};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValeFile {
    pub materiales: Vec<[String; 2]>,
    pub reportados: Vec<[String; 3]>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistroFile {
    #[serde(flatten)]
    pub draft: FormDraft,
    pub reporte: String,
    pub items: Vec<[String; 2]>,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ValesError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ValesError::InvalidDraft(format!("{}: {}", path.display(), e)))
}

impl ValeFile {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Libro de selección con los materiales del archivo
    ///
    /// Se aplica la misma regla de repetidos que en la página.
    pub fn ledger(&self) -> Result<SelectionLedger> {
        Ok(SelectionLedger::from_parts(&self.materiales, &self.reportados)?)
    }

    /// Cuerpo listo para enviar; exige al menos un material
    pub fn into_request(self, id: &str) -> Result<ValeEditRequest> {
        let ledger = self.ledger()?;
        vales_common::check_edit(&ledger)?;
        Ok(ValeEditRequest::from_ledger(Identificacion::parse(id), &ledger))
    }
}

impl RegistroFile {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Valida campos y materiales igual que el formulario
    pub fn into_request(self) -> Result<RegistroRequest> {
        let ledger = SelectionLedger::from_parts(&self.items, &[])?;
        self.draft.validate(&ledger)?;
        Ok(RegistroRequest::new(self.draft, &self.reporte, &ledger))
    }
}
