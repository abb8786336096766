pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell: top bar plus the routed content below it
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-content">{children()}</main>
        </div>
    }
}
