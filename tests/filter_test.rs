//! Filtro de líneas de un archivo (`vales filtrar`)

use tempfile::tempdir;
use vales_cli::output::filter_lines;

#[test]
fn test_filter_lines_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("equipo.txt");
    std::fs::write(&path, "Microscope\nBeaker\n\nPipette\n").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(filter_lines(&content, "be"), vec!["Beaker"]);
    assert_eq!(filter_lines(&content, "MICRO"), vec!["Microscope"]);
    assert_eq!(filter_lines(&content, ""), vec!["Microscope", "Beaker", "Pipette"]);
}

/// Las líneas devueltas viven lo mismo que el texto
#[test]
fn test_filtered_lines_outlive_query() {
    let content = String::from("Vaso\nVaso de precipitado\nBureta");
    let matches = {
        let query = String::from("vaso");
        filter_lines(&content, &query)
    };
    assert_eq!(matches, vec!["Vaso", "Vaso de precipitado"]);
}
