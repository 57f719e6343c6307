//! ==============================================================================
//! lib.rs - API Test Panel
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm single-page panel for poking a test backend. one button
//!     per backend route; each click fires a GET and the returned payload
//!     (image url, text, or color) is rendered inline on that card.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the backend via fetch, bodies kept as raw json
//!     - catalog/store/projection logic lives in the shared crate
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

use shared::{ResultStore, ENDPOINTS};

mod api;
mod components;
mod sinks;

use components::{EndpointPanel, Header};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // one store for the whole panel: label -> last successful body
    let (results, set_results) = signal(ResultStore::new());

    view! {
        <Title text="API Test Panel" />
        <Header />
        <div class="container">
            <div class="panel-grid">
                {ENDPOINTS
                    .iter()
                    .copied()
                    .map(|endpoint| {
                        view! {
                            <EndpointPanel endpoint=endpoint results=results set_results=set_results />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
