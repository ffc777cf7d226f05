//! Validación previa y control de envíos en curso

use std::collections::HashSet;

use tracing::warn;

use crate::error::ValidationError;
use crate::ledger::SelectionLedger;
use crate::protocol::Flow;

/// Edición de vale: debe quedar al menos un material
pub fn check_edit(ledger: &SelectionLedger) -> Result<(), ValidationError> {
    if ledger.is_empty() {
        return Err(ValidationError::NoMaterials);
    }
    Ok(())
}

/// Envíos sin respuesta todavía
///
/// Un segundo clic antes de que llegue la respuesta se ignora.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: HashSet<(Flow, String)>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, flow: Flow, key: &str) -> Result<(), ValidationError> {
        if !self.in_flight.insert((flow, key.to_string())) {
            warn!(endpoint = flow.path(), key, "envío duplicado ignorado");
            return Err(ValidationError::AlreadyInFlight);
        }
        Ok(())
    }

    pub fn finish(&mut self, flow: Flow, key: &str) {
        self.in_flight.remove(&(flow, key.to_string()));
    }

    pub fn is_in_flight(&self, flow: Flow, key: &str) -> bool {
        self.in_flight.contains(&(flow, key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_edit_requires_materials() {
        let mut ledger = SelectionLedger::new();
        assert_eq!(check_edit(&ledger).unwrap_err(), ValidationError::NoMaterials);
        ledger.add_predefined("Pinzas", "1").unwrap();
        assert!(check_edit(&ledger).is_ok());
    }

    #[test]
    fn test_guard_rejects_second_submit() {
        let mut guard = SubmitGuard::new();
        guard.begin(Flow::AcceptSolicitud, "3").unwrap();
        assert_eq!(
            guard.begin(Flow::AcceptSolicitud, "3").unwrap_err(),
            ValidationError::AlreadyInFlight
        );
        // otra solicitud u otro flujo no se bloquean
        assert!(guard.begin(Flow::AcceptSolicitud, "4").is_ok());
        assert!(guard.begin(Flow::CancelSolicitud, "3").is_ok());
    }

    #[test]
    fn test_guard_finish_allows_retry() {
        let mut guard = SubmitGuard::new();
        guard.begin(Flow::Register, "").unwrap();
        assert!(guard.is_in_flight(Flow::Register, ""));
        guard.finish(Flow::Register, "");
        assert!(guard.begin(Flow::Register, "").is_ok());
    }
}
