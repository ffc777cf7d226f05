//! Materiales seleccionados y reportados

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Material seleccionado con su cantidad
///
/// Nombre y cantidad se guardan recortados; la clave de unicidad es el par.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMaterial {
    pub name: String,
    pub quantity: String,
}

impl SelectedMaterial {
    pub fn new(name: &str, quantity: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            quantity: quantity.trim().to_string(),
        }
    }

    /// Mismo nombre y cantidad
    pub fn same_pair(&self, name: &str, quantity: &str) -> bool {
        self.name == name.trim() && self.quantity == quantity.trim()
    }

    pub fn to_pair(&self) -> [String; 2] {
        [self.name.clone(), self.quantity.clone()]
    }
}

/// Material reportado como defectuoso
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedMaterial {
    pub name: String,
    pub quantity: String,
    pub comment: String,
}

impl ReportedMaterial {
    pub fn to_triple(&self) -> [String; 3] {
        [self.name.clone(), self.quantity.clone(), self.comment.clone()]
    }
}

/// Separa el texto de un material predefinido (`"nombre:cantidad"`)
///
/// Se toman los dos primeros segmentos separados por `:`; el resto se ignora.
/// Ambos deben quedar no vacíos.
pub fn parse_predefined(text: &str) -> Result<(String, String), LedgerError> {
    let mut parts = text.split(':').map(str::trim);
    let name = parts.next().unwrap_or_default();
    let quantity = parts
        .next()
        .ok_or_else(|| LedgerError::MalformedItem(text.to_string()))?;

    if name.is_empty() || quantity.is_empty() {
        return Err(LedgerError::MalformedItem(text.to_string()));
    }

    Ok((name.to_string(), quantity.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let m = SelectedMaterial::new("  Osciloscopio ", " 1 ");
        assert_eq!(m.name, "Osciloscopio");
        assert_eq!(m.quantity, "1");
    }

    #[test]
    fn test_same_pair_compares_trimmed() {
        let m = SelectedMaterial::new("Cable banana", "4");
        assert!(m.same_pair(" Cable banana", "4 "));
        assert!(!m.same_pair("Cable banana", "2"));
        assert!(!m.same_pair("cable banana", "4"));
    }

    #[test]
    fn test_parse_predefined() {
        let (name, quantity) = parse_predefined("Fuente de poder : 2").expect("no se pudo separar");
        assert_eq!(name, "Fuente de poder");
        assert_eq!(quantity, "2");
    }

    #[test]
    fn test_parse_predefined_ignores_extra_segments() {
        let (name, quantity) = parse_predefined("Resistencia: 10: kΩ").expect("no se pudo separar");
        assert_eq!(name, "Resistencia");
        assert_eq!(quantity, "10");
    }

    #[test]
    fn test_parse_predefined_rejects_missing_colon() {
        let err = parse_predefined("Protoboard").unwrap_err();
        assert_eq!(err, LedgerError::MalformedItem("Protoboard".to_string()));
    }

    #[test]
    fn test_parse_predefined_rejects_empty_half() {
        assert!(parse_predefined("Protoboard:  ").is_err());
        assert!(parse_predefined(" : 3").is_err());
    }

    #[test]
    fn test_reported_to_triple() {
        let r = ReportedMaterial {
            name: "Multímetro".into(),
            quantity: "1".into(),
            comment: "Pantalla rota".into(),
        };
        assert_eq!(r.to_triple(), ["Multímetro", "1", "Pantalla rota"].map(String::from));
    }
}
