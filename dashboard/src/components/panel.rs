//! Endpoint card component

use leptos::prelude::*;

use shared::{project, record_completion, Endpoint, Rendered, ResultStore};

use crate::api;
use crate::sinks::{ConsoleDiagnostics, DocumentBackdrop};

#[component]
pub fn EndpointPanel(
    endpoint: Endpoint,
    results: ReadSignal<ResultStore>,
    set_results: WriteSignal<ResultStore>,
) -> impl IntoView {
    // fire one GET for this card. the button stays clickable while a
    // request is in flight; overlapping responses land in completion order
    let fire = move |_| {
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_panel_body(endpoint.path).await;
            set_results.update(|store| {
                record_completion(
                    store,
                    endpoint.label,
                    outcome,
                    &mut DocumentBackdrop,
                    &mut ConsoleDiagnostics,
                );
            });
        });
    };

    view! {
        <div class="card">
            <button class="trigger" on:click=fire>
                {endpoint.label.as_str()}
            </button>

            // last good payload for this card, if any
            <div class="card-result">
                {move || {
                    results
                        .with(|store| {
                            store
                                .body(endpoint.label)
                                .and_then(|body| project(endpoint.label, body))
                        })
                        .map(|rendered| match rendered {
                            Rendered::Image(url) => view! {
                                <img class="result-image" src=url alt=endpoint.label.as_str() />
                            }
                                .into_any(),
                            Rendered::Text(text) => view! {
                                <p class="result-text">{text}</p>
                            }
                                .into_any(),
                        })
                }}
            </div>
        </div>
    }
}
