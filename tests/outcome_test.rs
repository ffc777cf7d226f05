//! Respuestas del servidor vistas desde la CLI

use vales_cli::output::describe;
use vales_common::{resolve, Error, Flow, Outcome, ServerReply};

#[test]
fn test_redirect_for_edit() {
    let reply = ServerReply::from_json(
        r#"{"status": "redirect", "mensaje": "Vale editado", "url": "/casetero/vales/activos"}"#,
    );
    let outcome = resolve(Flow::EditActiveVale, reply);

    assert_eq!(
        outcome,
        Outcome::Redirect {
            mensaje: "Vale editado".into(),
            url: "/casetero/vales/activos".into(),
        }
    );
    assert!(describe(&outcome).0);
}

#[test]
fn test_alerta_for_signature() {
    let reply = ServerReply::from_json(r#"{"status": "alerta", "mensaje": "Solicitud aceptada"}"#);
    let outcome = resolve(Flow::AcceptSolicitud, reply);

    assert!(matches!(outcome, Outcome::SolicitudResolved(_)));
    let (ok, text) = describe(&outcome);
    assert!(ok);
    assert!(text.contains("Solicitud aceptada"));
}

/// `alerta` no es éxito para un registro
#[test]
fn test_mismatched_status_is_failure() {
    let reply = ServerReply::from_json(r#"{"status": "alerta", "mensaje": "?"}"#);
    let (ok, text) = describe(&resolve(Flow::Register, reply));

    assert!(!ok);
    assert!(text.contains("Respuesta inesperada del servidor"));
}

#[test]
fn test_transport_failure() {
    let outcome = resolve(Flow::CancelSolicitud, Err(Error::Transport("timeout".into())));
    let (ok, text) = describe(&outcome);

    assert!(!ok);
    assert!(text.contains("No se pudo conectar con el servidor"));
}

#[test]
fn test_server_error_message() {
    let reply = ServerReply::from_json(r#"{"status": "error", "mensaje": "Vale cerrado"}"#);
    let (ok, text) = describe(&resolve(Flow::EditTeacherVale, reply));

    assert!(!ok);
    assert_eq!(text, "✗ Error: Vale cerrado");
}
