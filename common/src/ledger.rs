//! Libro de selección de materiales
//!
//! Modelo autoritativo de los materiales elegidos en un vale. La tabla
//! `.seccionMTabla` de la página es sólo una proyección de este estado.
//!
//! - Selección: pares (nombre, cantidad) en orden de inserción, sin repetidos
//! - Reportados: materiales retirados con un motivo, se envían aparte
//! - Ranuras únicas: nombre en espera de cantidad y material pendiente de
//!   eliminar o reportar (la última escritura gana)

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::material::{parse_predefined, ReportedMaterial, SelectedMaterial};

/// Identificador estable de una fila del libro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fila del libro
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub material: SelectedMaterial,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLedger {
    entries: Vec<LedgerEntry>,
    reported: Vec<ReportedMaterial>,
    next_id: u32,
    /// Nombre elegido que espera su cantidad
    staged_name: Option<String>,
    /// Material sobre el que se abrió la confirmación de eliminar/reportar
    pending: Option<EntryId>,
}

impl SelectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruye un libro a partir de listas con forma de payload
    ///
    /// Rechaza pares repetidos igual que `add_predefined`.
    pub fn from_parts(
        materiales: &[[String; 2]],
        reportados: &[[String; 3]],
    ) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for [name, quantity] in materiales {
            ledger.add_predefined(name, quantity)?;
        }
        ledger.reported = reportados
            .iter()
            .map(|[name, quantity, comment]| ReportedMaterial {
                name: name.trim().to_string(),
                quantity: quantity.trim().to_string(),
                comment: comment.trim().to_string(),
            })
            .collect();
        Ok(ledger)
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn reported(&self) -> &[ReportedMaterial] {
        &self.reported
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&SelectedMaterial> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.material)
    }

    pub fn contains_pair(&self, name: &str, quantity: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.material.same_pair(name, quantity))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.entries.iter().any(|e| e.material.name == name)
    }

    /// Agrega un material predefinido
    ///
    /// El duplicado se detecta por el par (nombre, cantidad).
    pub fn add_predefined(&mut self, name: &str, quantity: &str) -> Result<EntryId, LedgerError> {
        if self.contains_pair(name, quantity) {
            warn!(name, quantity, "material duplicado rechazado");
            return Err(LedgerError::Duplicate {
                name: name.trim().to_string(),
                quantity: quantity.trim().to_string(),
            });
        }
        Ok(self.push(SelectedMaterial::new(name, quantity)))
    }

    /// Agrega un material predefinido a partir de su texto `"nombre:cantidad"`
    pub fn add_predefined_text(&mut self, text: &str) -> Result<EntryId, LedgerError> {
        let (name, quantity) = parse_predefined(text)?;
        self.add_predefined(&name, &quantity)
    }

    /// Primer paso del material libre: guarda el nombre hasta elegir cantidad
    ///
    /// El duplicado se detecta sólo por nombre.
    pub fn stage_custom(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.contains_name(name) {
            warn!(name, "nombre duplicado rechazado");
            return Err(LedgerError::DuplicateName(name.trim().to_string()));
        }
        self.staged_name = Some(name.trim().to_string());
        Ok(())
    }

    pub fn staged_name(&self) -> Option<&str> {
        self.staged_name.as_deref()
    }

    /// Segundo paso del material libre
    pub fn confirm_quantity(&mut self, quantity: &str) -> Result<EntryId, LedgerError> {
        let name = self.staged_name.take().ok_or(LedgerError::NothingStaged)?;
        Ok(self.push(SelectedMaterial::new(&name, quantity)))
    }

    pub fn cancel_staged(&mut self) {
        self.staged_name = None;
    }

    /// Marca un material como pendiente de eliminar o reportar
    pub fn request_removal(&mut self, id: EntryId) -> Result<(), LedgerError> {
        if self.get(id).is_none() {
            return Err(LedgerError::UnknownEntry(id));
        }
        self.pending = Some(id);
        Ok(())
    }

    pub fn pending(&self) -> Option<EntryId> {
        self.pending
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Elimina el material pendiente; sin pendiente no hace nada
    pub fn confirm_removal(&mut self) -> Option<SelectedMaterial> {
        let id = self.pending.take()?;
        self.remove(id).ok()
    }

    /// Elimina un material sin condiciones
    pub fn remove(&mut self, id: EntryId) -> Result<SelectedMaterial, LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::UnknownEntry(id))?;
        if self.pending == Some(id) {
            self.pending = None;
        }
        let entry = self.entries.remove(index);
        debug!(id = %id, name = %entry.material.name, "material eliminado");
        Ok(entry.material)
    }

    /// Reporta el material pendiente
    pub fn report(&mut self, comment: &str) -> Result<&ReportedMaterial, LedgerError> {
        if comment.trim().is_empty() {
            return Err(LedgerError::EmptyComment);
        }
        let id = self.pending.ok_or(LedgerError::NothingPending)?;
        self.report_entry(id, comment)
    }

    /// Retira un material y lo agrega a la lista de reportados
    pub fn report_entry(
        &mut self,
        id: EntryId,
        comment: &str,
    ) -> Result<&ReportedMaterial, LedgerError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(LedgerError::EmptyComment);
        }
        let material = self.remove(id)?;
        debug!(name = %material.name, comment, "material reportado");
        self.reported.push(ReportedMaterial {
            name: material.name,
            quantity: material.quantity,
            comment: comment.to_string(),
        });
        Ok(&self.reported[self.reported.len() - 1])
    }

    /// Vacía la selección (cambio de salón); los reportados se conservan
    pub fn clear(&mut self) {
        self.entries.clear();
        self.staged_name = None;
        self.pending = None;
    }

    /// Pares `[nombre, cantidad]` en orden de inserción
    pub fn serialize(&self) -> Vec<[String; 2]> {
        self.entries.iter().map(|e| e.material.to_pair()).collect()
    }

    /// Ternas `[nombre, cantidad, comentario]`
    pub fn serialize_reported(&self) -> Vec<[String; 3]> {
        self.reported.iter().map(ReportedMaterial::to_triple).collect()
    }

    fn push(&mut self, material: SelectedMaterial) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        debug!(id = %id, name = %material.name, quantity = %material.quantity, "material agregado");
        self.entries.push(LedgerEntry { id, material });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(ledger: &SelectionLedger) -> Vec<(String, String)> {
        ledger
            .serialize()
            .into_iter()
            .map(|[n, q]| (n, q))
            .collect()
    }

    // =============================================
    // Alta de materiales
    // =============================================

    #[test]
    fn test_add_predefined_appends_in_order() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined("Osciloscopio", "1").unwrap();
        ledger.add_predefined("Cable banana", "4").unwrap();

        assert_eq!(
            pairs(&ledger),
            vec![
                ("Osciloscopio".to_string(), "1".to_string()),
                ("Cable banana".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_add_predefined_duplicate_pair_rejected() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined("Multímetro", "2").unwrap();

        let err = ledger.add_predefined(" Multímetro ", "2").unwrap_err();
        assert!(matches!(err, LedgerError::Duplicate { .. }));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_predefined_same_name_other_quantity_allowed() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined("Multímetro", "2").unwrap();
        ledger.add_predefined("Multímetro", "3").unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_add_predefined_text() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined_text("Protoboard : 1").unwrap();
        assert!(ledger.contains_pair("Protoboard", "1"));

        assert!(ledger.add_predefined_text("Protoboard:1").is_err());
        assert!(ledger.add_predefined_text("sin cantidad").is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_custom_two_step() {
        let mut ledger = SelectionLedger::new();
        ledger.stage_custom("Generador de funciones").unwrap();
        assert_eq!(ledger.staged_name(), Some("Generador de funciones"));

        ledger.confirm_quantity("1").unwrap();
        assert!(ledger.staged_name().is_none());
        assert!(ledger.contains_pair("Generador de funciones", "1"));
    }

    #[test]
    fn test_custom_duplicate_checked_by_name() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined("Generador de funciones", "1").unwrap();

        let err = ledger.stage_custom("Generador de funciones").unwrap_err();
        assert_eq!(err, LedgerError::DuplicateName("Generador de funciones".to_string()));
        assert!(ledger.staged_name().is_none());
    }

    #[test]
    fn test_confirm_quantity_without_staged() {
        let mut ledger = SelectionLedger::new();
        assert_eq!(ledger.confirm_quantity("2").unwrap_err(), LedgerError::NothingStaged);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_cancel_staged() {
        let mut ledger = SelectionLedger::new();
        ledger.stage_custom("Pinzas").unwrap();
        ledger.cancel_staged();
        assert!(ledger.confirm_quantity("1").is_err());
    }

    // =============================================
    // Eliminación y reporte
    // =============================================

    #[test]
    fn test_confirm_removal_removes_pending() {
        let mut ledger = SelectionLedger::new();
        let a = ledger.add_predefined("A", "1").unwrap();
        let b = ledger.add_predefined("B", "1").unwrap();

        ledger.request_removal(a).unwrap();
        ledger.request_removal(b).unwrap(); // la última gana
        let removed = ledger.confirm_removal().expect("sin pendiente");

        assert_eq!(removed.name, "B");
        assert_eq!(ledger.len(), 1);
        assert!(ledger.pending().is_none());
    }

    #[test]
    fn test_confirm_removal_without_pending_is_noop() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined("A", "1").unwrap();
        assert!(ledger.confirm_removal().is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_request_removal_unknown_entry() {
        let mut ledger = SelectionLedger::new();
        let err = ledger.request_removal(EntryId(42)).unwrap_err();
        assert_eq!(err, LedgerError::UnknownEntry(EntryId(42)));
    }

    #[test]
    fn test_report_moves_entry() {
        let mut ledger = SelectionLedger::new();
        let id = ledger.add_predefined("Multímetro", "1").unwrap();
        ledger.add_predefined("Cable", "2").unwrap();
        ledger.request_removal(id).unwrap();

        let reported = ledger.report("  Pantalla rota ").unwrap().clone();
        assert_eq!(reported.name, "Multímetro");
        assert_eq!(reported.quantity, "1");
        assert_eq!(reported.comment, "Pantalla rota");

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.reported().len(), 1);
        assert!(ledger.pending().is_none());
    }

    #[test]
    fn test_report_empty_comment_changes_nothing() {
        let mut ledger = SelectionLedger::new();
        let id = ledger.add_predefined("Multímetro", "1").unwrap();
        ledger.request_removal(id).unwrap();

        assert_eq!(ledger.report("   ").unwrap_err(), LedgerError::EmptyComment);
        assert_eq!(ledger.report("").unwrap_err(), LedgerError::EmptyComment);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.reported().is_empty());
        assert_eq!(ledger.pending(), Some(id));
    }

    #[test]
    fn test_report_without_pending() {
        let mut ledger = SelectionLedger::new();
        ledger.add_predefined("A", "1").unwrap();
        assert_eq!(ledger.report("roto").unwrap_err(), LedgerError::NothingPending);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut ledger = SelectionLedger::new();
        let a = ledger.add_predefined("A", "1").unwrap();
        ledger.remove(a).unwrap();
        let b = ledger.add_predefined("A", "1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_clear_keeps_reported() {
        let mut ledger = SelectionLedger::new();
        let a = ledger.add_predefined("A", "1").unwrap();
        ledger.add_predefined("B", "1").unwrap();
        ledger.report_entry(a, "falla").unwrap();
        ledger.stage_custom("C").unwrap();

        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.staged_name().is_none());
        assert_eq!(ledger.reported().len(), 1);
    }

    // =============================================
    // Serialización
    // =============================================

    #[test]
    fn test_serialize_empty() {
        let ledger = SelectionLedger::new();
        assert!(ledger.serialize().is_empty());
        assert!(ledger.serialize_reported().is_empty());
    }

    #[test]
    fn test_serialize_reported_separately() {
        let mut ledger = SelectionLedger::new();
        let a = ledger.add_predefined("A", "1").unwrap();
        ledger.add_predefined("B", "3").unwrap();
        ledger.report_entry(a, "golpeado").unwrap();

        assert_eq!(ledger.serialize(), vec![["B".to_string(), "3".to_string()]]);
        assert_eq!(
            ledger.serialize_reported(),
            vec![["A".to_string(), "1".to_string(), "golpeado".to_string()]]
        );
    }

    #[test]
    fn test_from_parts() {
        let materiales = vec![
            ["A".to_string(), "1".to_string()],
            ["B".to_string(), "2".to_string()],
        ];
        let reportados = vec![["C".to_string(), "1".to_string(), "roto".to_string()]];

        let ledger = SelectionLedger::from_parts(&materiales, &reportados).unwrap();
        assert_eq!(ledger.serialize(), materiales);
        assert_eq!(ledger.serialize_reported(), reportados);
    }

    #[test]
    fn test_from_parts_rejects_duplicates() {
        let materiales = vec![
            ["A".to_string(), "1".to_string()],
            ["A".to_string(), "1".to_string()],
        ];
        assert!(SelectionLedger::from_parts(&materiales, &[]).is_err());
    }
}
