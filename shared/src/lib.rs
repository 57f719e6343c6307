//! ==============================================================================
//! lib.rs - shared types and panel logic for the api test panel
//! ==============================================================================
//!
//! purpose:
//!     defines the endpoint catalog, the per-endpoint result store, and the
//!     rules for turning a fetched json body into something the panel can
//!     show. everything here is plain rust with no browser dependency, so
//!     the whole behavior of the panel is unit-testable on the host.
//!
//! relationships:
//!     - used by: dashboard (catalog, store, projection, sinks)
//!
//! design rationale:
//!     the backend contract is "one json object with one interesting field
//!     per route", so bodies are kept as raw serde_json values and each
//!     label knows which field it projects. side effects that would touch
//!     the page (background color, console diagnostics) go through sink
//!     traits the dashboard implements, instead of reaching for globals.
//!
//! ==============================================================================

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==============================================================================
// endpoint catalog
// ==============================================================================

/// the six panel buttons, one per backend route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Color,
    Cat,
    Photo,
    Time,
    Scare,
    Lookalike,
}

impl Label {
    /// button text as shown on the panel
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Color => "Color",
            Label::Cat => "Cat",
            Label::Photo => "Photo",
            Label::Time => "Time",
            Label::Scare => "Scare",
            Label::Lookalike => "Lookalike",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// one catalog entry: a button label and the route it fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub label: Label,
    pub path: &'static str,
}

/// the fixed catalog, in display order
pub static ENDPOINTS: [Endpoint; 6] = [
    Endpoint { label: Label::Color, path: "/color" },
    Endpoint { label: Label::Cat, path: "/cat" },
    Endpoint { label: Label::Photo, path: "/random-photo" },
    Endpoint { label: Label::Time, path: "/time" },
    Endpoint { label: Label::Scare, path: "/scare" },
    Endpoint { label: Label::Lookalike, path: "/lookalike" },
];

// ==============================================================================
// render projection
// ==============================================================================

/// what a panel card shows for a stored body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Image(String),
    Text(String),
}

/// pick the displayable field of a stored body for the given label.
///
/// each label projects exactly one field. Color is deliberately absent
/// from this set: its payload only drives the page background, so its
/// card stays empty. a missing or non-string field projects to nothing.
pub fn project(label: Label, body: &Value) -> Option<Rendered> {
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);

    match label {
        Label::Cat => field("cat_image_url").map(Rendered::Image),
        Label::Photo => field("random_photo_url").map(Rendered::Image),
        Label::Time => field("current_time").map(Rendered::Text),
        Label::Scare => field("scare_image_url").map(Rendered::Image),
        Label::Lookalike => field("lookalike_image_url").map(Rendered::Image),
        Label::Color => None,
    }
}

// ==============================================================================
// result store
// ==============================================================================

/// last successful response body per label.
///
/// an entry appears only once that label's fetch has succeeded, and a
/// later success overwrites it. failures never touch the map, so a card
/// keeps showing its last good body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    entries: HashMap<Label, Value>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// stored body for a label, if any fetch for it has succeeded yet
    pub fn body(&self, label: Label) -> Option<&Value> {
        self.entries.get(&label)
    }

    /// store a successful body, replacing only this label's entry
    pub fn record(&mut self, label: Label, body: Value) {
        self.entries.insert(label, body);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==============================================================================
// side-effect sinks
// ==============================================================================

/// receiver for the whole-page background mutation the Color button makes.
/// the dashboard backs this with the document body; tests record calls.
pub trait BackdropSink {
    fn set_background(&mut self, color: &str);
}

/// receiver for swallowed fetch failures. the dashboard backs this with
/// the browser console; tests count reports.
pub trait DiagnosticSink {
    fn report(&mut self, label: Label, error: &str);
}

// ==============================================================================
// completion handling
// ==============================================================================

/// fold one finished fetch into the panel state.
///
/// success merges the body under its label (other labels untouched) and,
/// for Color, pushes the body's `color` string at the backdrop. failure
/// goes to the diagnostic sink once and leaves the store exactly as it
/// was. calls land in completion order, so overlapping fetches for one
/// label end with whichever completed last.
pub fn record_completion(
    store: &mut ResultStore,
    label: Label,
    outcome: Result<Value, String>,
    backdrop: &mut dyn BackdropSink,
    diagnostics: &mut dyn DiagnosticSink,
) {
    match outcome {
        Ok(body) => {
            store.record(label, body);
            if label == Label::Color {
                let color = store.body(label).and_then(|b| b.get("color")).and_then(Value::as_str);
                if let Some(color) = color {
                    backdrop.set_background(color);
                }
            }
        }
        Err(error) => diagnostics.report(label, &error),
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct RecordingBackdrop {
        colors: Vec<String>,
    }

    impl BackdropSink for RecordingBackdrop {
        fn set_background(&mut self, color: &str) {
            self.colors.push(color.to_owned());
        }
    }

    #[derive(Default)]
    struct RecordingDiagnostics {
        reports: Vec<(Label, String)>,
    }

    impl DiagnosticSink for RecordingDiagnostics {
        fn report(&mut self, label: Label, error: &str) {
            self.reports.push((label, error.to_owned()));
        }
    }

    fn complete(
        store: &mut ResultStore,
        label: Label,
        outcome: Result<Value, String>,
    ) -> (RecordingBackdrop, RecordingDiagnostics) {
        let mut backdrop = RecordingBackdrop::default();
        let mut diagnostics = RecordingDiagnostics::default();
        record_completion(store, label, outcome, &mut backdrop, &mut diagnostics);
        (backdrop, diagnostics)
    }

    #[test]
    fn test_catalog_routes() {
        let paths: Vec<&str> = ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            ["/color", "/cat", "/random-photo", "/time", "/scare", "/lookalike"]
        );
        // labels are unique, so the store really is one entry per button
        let mut labels: Vec<&str> = ENDPOINTS.iter().map(|e| e.label.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_empty_store_shows_nothing() {
        let store = ResultStore::new();
        for endpoint in &ENDPOINTS {
            assert!(store.body(endpoint.label).is_none());
        }
    }

    #[test]
    fn test_success_stores_body_and_projects_its_field() {
        let mut store = ResultStore::new();
        let body = json!({ "cat_image_url": "https://cats.example/1.jpg" });
        complete(&mut store, Label::Cat, Ok(body.clone()));

        assert_eq!(store.body(Label::Cat), Some(&body));
        assert_eq!(
            project(Label::Cat, store.body(Label::Cat).unwrap()),
            Some(Rendered::Image("https://cats.example/1.jpg".to_owned()))
        );
    }

    #[test]
    fn test_success_leaves_other_labels_alone() {
        let mut store = ResultStore::new();
        let time = json!({ "current_time": "2024-05-01T12:00:00Z" });
        complete(&mut store, Label::Time, Ok(time.clone()));
        complete(
            &mut store,
            Label::Scare,
            Ok(json!({ "scare_image_url": "https://boo.example/a.png" })),
        );

        assert_eq!(store.len(), 2);
        assert_eq!(store.body(Label::Time), Some(&time));
        assert_eq!(
            project(Label::Time, store.body(Label::Time).unwrap()),
            Some(Rendered::Text("2024-05-01T12:00:00Z".to_owned()))
        );
    }

    #[test]
    fn test_color_drives_backdrop_and_store() {
        let mut store = ResultStore::new();
        let body = json!({ "color": "#ff0000" });
        let (backdrop, diagnostics) = complete(&mut store, Label::Color, Ok(body.clone()));

        // two distinct effects: the stored body and the page background
        assert_eq!(store.body(Label::Color), Some(&body));
        assert_eq!(backdrop.colors, ["#ff0000"]);
        assert!(diagnostics.reports.is_empty());
        // the Color card itself never renders anything
        assert_eq!(project(Label::Color, &body), None);
    }

    #[test]
    fn test_color_without_color_field_skips_backdrop() {
        let mut store = ResultStore::new();
        let (backdrop, _) = complete(&mut store, Label::Color, Ok(json!({ "hue": 12 })));
        assert!(backdrop.colors.is_empty());
        // the body is still stored, only the side effect is skipped
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failure_keeps_store_and_reports_once() {
        let mut store = ResultStore::new();
        let previous = json!({ "random_photo_url": "https://pix.example/old.jpg" });
        store.record(Label::Photo, previous.clone());

        let (backdrop, diagnostics) =
            complete(&mut store, Label::Photo, Err("connection refused".to_owned()));

        assert_eq!(store.body(Label::Photo), Some(&previous));
        assert_eq!(diagnostics.reports.len(), 1);
        assert_eq!(diagnostics.reports[0].0, Label::Photo);
        assert!(backdrop.colors.is_empty());
    }

    #[test]
    fn test_failure_on_untriggered_label_stays_absent() {
        let mut store = ResultStore::new();
        let (_, diagnostics) = complete(&mut store, Label::Cat, Err("bad json".to_owned()));
        assert!(store.body(Label::Cat).is_none());
        assert!(store.is_empty());
        assert_eq!(diagnostics.reports.len(), 1);
    }

    #[test]
    fn test_overlapping_fetches_last_completion_wins() {
        // two fetches for one label in flight: the later dispatch lands
        // first, then the earlier one lands and overwrites it
        let mut store = ResultStore::new();
        let b2 = json!({ "current_time": "second dispatch" });
        let b1 = json!({ "current_time": "first dispatch" });
        complete(&mut store, Label::Time, Ok(b2));
        complete(&mut store, Label::Time, Ok(b1.clone()));

        assert_eq!(store.body(Label::Time), Some(&b1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_projection_ignores_missing_or_wrong_typed_fields() {
        assert_eq!(project(Label::Cat, &json!({})), None);
        assert_eq!(project(Label::Time, &json!({ "current_time": 1714564800 })), None);
        assert_eq!(
            project(
                Label::Lookalike,
                &json!({ "lookalike_image_url": "https://twin.example/x.jpg" })
            ),
            Some(Rendered::Image("https://twin.example/x.jpg".to_owned()))
        );
    }
}
