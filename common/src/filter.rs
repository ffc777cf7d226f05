//! Filtro de listas por texto
//!
//! Comparación por subcadena sin distinguir mayúsculas. Los elementos que no
//! coinciden se ocultan, nunca se quitan del documento.

/// Forma de ocultar un elemento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideStrategy {
    /// `display: flex` / `display: none` (listas de los selectores)
    Display,
    /// Colapso por visibilidad, posición, altura y opacidad (tabla de solicitudes)
    Collapse,
}

impl HideStrategy {
    /// Propiedades CSS a aplicar según la visibilidad
    pub fn styles(&self, visible: bool) -> &'static [(&'static str, &'static str)] {
        match (self, visible) {
            (HideStrategy::Display, true) => &[("display", "flex")],
            (HideStrategy::Display, false) => &[("display", "none")],
            (HideStrategy::Collapse, true) => &[
                ("visibility", "visible"),
                ("position", "relative"),
                ("height", "auto"),
                ("opacity", "1"),
            ],
            (HideStrategy::Collapse, false) => &[
                ("visibility", "hidden"),
                ("position", "absolute"),
                ("height", "0px"),
                ("opacity", "0"),
            ],
        }
    }
}

/// Lugar del documento donde se aplica un filtro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTarget {
    /// id del campo de búsqueda
    pub input_id: &'static str,
    /// Selector de los elementos filtrables
    pub item_selector: &'static str,
    pub strategy: HideStrategy,
}

/// Tabla de solicitudes del maestro
pub const SOLICITUDES: FilterTarget = FilterTarget {
    input_id: "searchInput",
    item_selector: "tbody tr",
    strategy: HideStrategy::Collapse,
};

/// Lista de equipos/materiales
pub const EQUIPO: FilterTarget = FilterTarget {
    input_id: "searchInputMaterial",
    item_selector: "#equipoLista li",
    strategy: HideStrategy::Display,
};

/// Lista de maestros
pub const MAESTROS: FilterTarget = FilterTarget {
    input_id: "searchInputTeacher",
    item_selector: "#teacherList li",
    strategy: HideStrategy::Display,
};

/// ¿El texto contiene la consulta?
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Visibilidad de cada elemento para una consulta
pub fn visibility<S: AsRef<str>>(items: &[S], query: &str) -> Vec<bool> {
    let query = query.to_lowercase();
    items
        .iter()
        .map(|item| item.as_ref().to_lowercase().contains(&query))
        .collect()
}

/// Elementos visibles para una consulta, en su orden original
pub fn filter<'a, S: AsRef<str>>(items: &'a [S], query: &str) -> Vec<&'a str> {
    items
        .iter()
        .zip(visibility(items, query))
        .filter(|(_, visible)| *visible)
        .map(|(item, _)| item.as_ref())
        .collect()
}
