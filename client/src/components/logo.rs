//! Brand lockup used in the page header.

use leptos::prelude::*;

/// Static "Ad | Funnel Labs" wordmark.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo" aria-label="Ad Funnel Labs Logo">
            <div class="logo__block">
                <span class="logo__ad">"Ad"</span>
            </div>
            <div class="logo__frame">
                <p class="logo__funnel">"Funnel"</p>
                <p class="logo__labs">"Labs"</p>
            </div>
        </div>
    }
}
