use crate::shared::icons::icon;
use crate::shared::session;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let login = session::get();

    view! {
        <header class="header">
            <div class="header__content">
                <span class="header__title">"Park and Ride"</span>
                <nav class="header__nav">
                    <A href="/facilities" attr:class="header__link">
                        {icon("facility")}
                        "Facilities"
                    </A>
                    <A href="/hubs" attr:class="header__link">
                        {icon("hub")}
                        "Hubs"
                    </A>
                </nav>
            </div>
            <div class="header__actions">
                {login.map(|login| view! { <span class="header__user">{login.username}</span> })}
            </div>
        </header>
    }
}
