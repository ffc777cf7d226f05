//! Borrador del registro nuevo
//!
//! Campos escalares ligados a un input cada uno. Todos son obligatorios.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ledger::SelectionLedger;

/// Campo del formulario de registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Control,
    Nombre,
    Materia,
    Grupo,
    Vale,
    Profesor,
    Alumnos,
    Laboratorio,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Control,
        FormField::Nombre,
        FormField::Materia,
        FormField::Grupo,
        FormField::Vale,
        FormField::Profesor,
        FormField::Alumnos,
        FormField::Laboratorio,
    ];

    /// Nombre del campo en el payload
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Control => "control",
            FormField::Nombre => "nombre",
            FormField::Materia => "materia",
            FormField::Grupo => "grupo",
            FormField::Vale => "vale",
            FormField::Profesor => "profesor",
            FormField::Alumnos => "alumnos",
            FormField::Laboratorio => "laboratorio",
        }
    }

    /// id del input en la página
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Control => "valeControlInput",
            FormField::Nombre => "valeNombreInput",
            FormField::Materia => "valeMateriaInput",
            FormField::Grupo => "valeGrupoInput",
            FormField::Vale => "valeLabInput",
            FormField::Profesor => "valeTeacherInput",
            FormField::Alumnos => "valeNumInput",
            FormField::Laboratorio => "valeSalonInput",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDraft {
    pub control: String,
    pub nombre: String,
    pub materia: String,
    pub grupo: String,
    pub vale: String,
    pub profesor: String,
    pub alumnos: String,
    pub laboratorio: String,
}

impl FormDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Control => &self.control,
            FormField::Nombre => &self.nombre,
            FormField::Materia => &self.materia,
            FormField::Grupo => &self.grupo,
            FormField::Vale => &self.vale,
            FormField::Profesor => &self.profesor,
            FormField::Alumnos => &self.alumnos,
            FormField::Laboratorio => &self.laboratorio,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Control => &mut self.control,
            FormField::Nombre => &mut self.nombre,
            FormField::Materia => &mut self.materia,
            FormField::Grupo => &mut self.grupo,
            FormField::Vale => &mut self.vale,
            FormField::Profesor => &mut self.profesor,
            FormField::Alumnos => &mut self.alumnos,
            FormField::Laboratorio => &mut self.laboratorio,
        };
        *slot = value.into();
    }

    /// Construye el borrador leyendo cada campo con `read(input_id)`
    pub fn read_with(mut read: impl FnMut(&str) -> String) -> Self {
        let mut draft = Self::default();
        for field in FormField::ALL {
            draft.set(field, read(field.input_id()));
        }
        draft
    }

    /// Campos vacíos, en el orden del formulario
    ///
    /// Sólo se comprueba presencia; el valor no se recorta.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Validación previa al envío: primero campos, luego materiales
    pub fn validate(&self, ledger: &SelectionLedger) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingInformation(missing));
        }
        if ledger.is_empty() {
            return Err(ValidationError::NoMaterials);
        }
        Ok(())
    }
}
