//! Archivos de vale y de registro

use std::path::Path;
use tempfile::tempdir;
use vales_cli::draft::{RegistroFile, ValeFile};
use vales_cli::error::ValesError;
use vales_common::{Error, Identificacion, LedgerError, ValidationError};

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Archivo inexistente
#[test]
fn test_load_nonexistent_file() {
    let err = ValeFile::load(Path::new("/nonexistent/vale/12345.json")).unwrap_err();
    assert!(matches!(err, ValesError::FileNotFound(_)));
}

#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write(dir.path(), "vale.json", r#"{"materiales": "no es lista"}"#);

    let err = ValeFile::load(&path).unwrap_err();
    assert!(matches!(err, ValesError::InvalidDraft(_)));
}

/// Edición con materiales y reportados
#[test]
fn test_vale_edit_request() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write(
        dir.path(),
        "vale.json",
        r#"{
            "materiales": [["Microscopio", "2"], [" Pipeta ", "5"]],
            "reportados": [["Vaso", "1", "Roto"]]
        }"#,
    );

    let body = ValeFile::load(&path).unwrap().into_request("18").unwrap();
    assert_eq!(body.identificacion, Identificacion::Number(18));
    assert_eq!(
        body.materiales,
        vec![
            ["Microscopio".to_string(), "2".to_string()],
            ["Pipeta".to_string(), "5".to_string()],
        ]
    );
    assert_eq!(body.reportados.len(), 1);
}

/// Un par repetido se rechaza igual que en la página
#[test]
fn test_vale_duplicate_pair() {
    let file = ValeFile {
        materiales: vec![
            ["Microscopio".into(), "2".into()],
            ["Microscopio".into(), "2".into()],
        ],
        reportados: vec![],
    };

    let err = file.into_request("1").unwrap_err();
    assert!(matches!(
        err,
        ValesError::Common(Error::Ledger(LedgerError::Duplicate { .. }))
    ));
}

/// Mismo nombre con otra cantidad es válido
#[test]
fn test_vale_same_name_other_quantity() {
    let file = ValeFile {
        materiales: vec![
            ["Microscopio".into(), "2".into()],
            ["Microscopio".into(), "3".into()],
        ],
        reportados: vec![],
    };
    assert_eq!(file.into_request("1").unwrap().materiales.len(), 2);
}

#[test]
fn test_vale_without_materials() {
    let err = ValeFile::default().into_request("1").unwrap_err();
    assert!(matches!(
        err,
        ValesError::Common(Error::Validation(ValidationError::NoMaterials))
    ));
}

/// Registro completo
#[test]
fn test_registro_request() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write(
        dir.path(),
        "registro.json",
        r#"{
            "control": "20231234",
            "nombre": "Ana López",
            "materia": "Química",
            "grupo": "3B",
            "vale": "Laboratorio 2",
            "profesor": "Dr. Ruiz",
            "alumnos": "4",
            "laboratorio": "L-201",
            "reporte": "  Sin novedad  ",
            "items": [["Bureta", "1"]]
        }"#,
    );

    let body = RegistroFile::load(&path).unwrap().into_request().unwrap();
    assert_eq!(body.draft.nombre, "Ana López");
    assert_eq!(body.reporte, "Sin novedad");
    assert_eq!(body.items, vec![["Bureta".to_string(), "1".to_string()]]);

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["control"], "20231234");
    assert_eq!(json["items"][0][0], "Bureta");
}

/// Campos vacíos se revisan antes que los materiales
#[test]
fn test_registro_missing_fields_first() {
    let file = RegistroFile::default();
    let err = file.into_request().unwrap_err();
    assert!(matches!(
        err,
        ValesError::Common(Error::Validation(ValidationError::MissingInformation(_)))
    ));
}
