//! Vales Common Library
//!
//! Modelo compartido entre la CLI y la interfaz web (WASM): libro de
//! selección, diálogos, filtro de listas, borrador de registro y protocolo
//! con el servidor.

pub mod dialog;
pub mod error;
pub mod filter;
pub mod form;
pub mod ledger;
pub mod material;
pub mod notice;
pub mod protocol;
pub mod submission;

pub use dialog::{DialogController, DialogHost, DialogId};
pub use error::{Error, LedgerError, Result, ValidationError};
pub use filter::{FilterTarget, HideStrategy};
pub use form::{FormDraft, FormField};
pub use ledger::{EntryId, LedgerEntry, SelectionLedger};
pub use material::{ReportedMaterial, SelectedMaterial};
pub use notice::{Notice, NoticeKind};
pub use protocol::{
    resolve, Flow, Identificacion, Outcome, RegistroRequest, ServerReply, SignatureRequest,
    ValeEditRequest, NOTIFICATION_KEY,
};
pub use submission::{check_edit, SubmitGuard};
