//! Manejadores que invocan las plantillas
//!
//! Cada función se exporta con el nombre que usan los atributos `onclick`
//! / `oninput` del HTML.

pub mod dialogs;
pub mod filters;
pub mod materials;
pub mod pickers;
pub mod registration;
pub mod solicitudes;
pub mod vales;
