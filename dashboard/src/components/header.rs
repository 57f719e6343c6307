//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"🎛️ API Test Panel"</h1>
                <p class="subtitle">"One button per backend route"</p>
            </div>
        </header>
    }
}
