//! Presentación de resultados en la terminal

use vales_common::{NoticeKind, Outcome};

/// Texto para la terminal y si el envío tuvo éxito
pub fn describe(outcome: &Outcome) -> (bool, String) {
    match outcome {
        Outcome::Notify(notice) => (
            notice.kind != NoticeKind::Error,
            format!("{} {}", mark(notice.kind), notice),
        ),
        Outcome::SolicitudResolved(notice) => (true, format!("{} {}", mark(notice.kind), notice)),
        Outcome::Redirect { mensaje, url } => (true, format!("✔ {}\n  → {}", mensaje, url)),
    }
}

fn mark(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => "✗",
        NoticeKind::Success => "✔",
        NoticeKind::Info => "•",
    }
}

/// Líneas de un archivo que coinciden con la consulta
pub fn filter_lines<'a>(content: &'a str, query: &str) -> Vec<&'a str> {
    let lines: Vec<&'a str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let visible = vales_common::filter::visibility(&lines, query);
    lines
        .into_iter()
        .zip(visible)
        .filter_map(|(line, visible)| visible.then_some(line))
        .collect()
}
