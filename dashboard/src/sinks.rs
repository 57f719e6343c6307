//! Browser-backed side-effect sinks

use shared::{BackdropSink, DiagnosticSink, Label};

/// paints the document body background (the Color button's page-wide effect)
pub struct DocumentBackdrop;

impl BackdropSink for DocumentBackdrop {
    fn set_background(&mut self, color: &str) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body.style().set_property("background-color", color);
        }
    }
}

/// routes swallowed fetch failures to the browser console
pub struct ConsoleDiagnostics;

impl DiagnosticSink for ConsoleDiagnostics {
    fn report(&mut self, label: Label, error: &str) {
        leptos::logging::error!("{} fetch failed: {}", label, error);
    }
}
