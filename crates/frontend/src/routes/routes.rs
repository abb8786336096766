use crate::domain::facility::ui::edit::FacilityEdit;
use crate::domain::facility::ui::list::FacilityList;
use crate::domain::facility::ui::view::FacilityView;
use crate::domain::hub::ui::list::HubList;
use crate::domain::hub::ui::view::HubView;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::params::ParamsMap;
use leptos_router::path;

fn parse_id(params: &ParamsMap) -> Option<i64> {
    params.get("id").and_then(|id| id.parse::<i64>().ok())
}

#[component]
fn FacilityCreatePage() -> impl IntoView {
    view! { <FacilityEdit id=None /> }
}

#[component]
fn FacilityEditPage() -> impl IntoView {
    let params = use_params_map();
    move || match parse_id(&params.read()) {
        Some(id) => view! { <FacilityEdit id=Some(id) /> }.into_any(),
        None => view! { <div class="error">"Unknown facility"</div> }.into_any(),
    }
}

#[component]
fn FacilityViewPage() -> impl IntoView {
    let params = use_params_map();
    move || match parse_id(&params.read()) {
        Some(id) => view! { <FacilityView id=id /> }.into_any(),
        None => view! { <div class="error">"Unknown facility"</div> }.into_any(),
    }
}

#[component]
fn HubViewPage() -> impl IntoView {
    let params = use_params_map();
    move || match parse_id(&params.read()) {
        Some(id) => view! { <HubView id=id /> }.into_any(),
        None => view! { <div class="error">"Unknown hub"</div> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="error">"Page not found"</div> }>
                    <Route path=path!("/") view=FacilityList />
                    <Route path=path!("/facilities") view=FacilityList />
                    <Route path=path!("/facilities/create") view=FacilityCreatePage />
                    <Route path=path!("/facilities/edit/:id") view=FacilityEditPage />
                    <Route path=path!("/facilities/:id") view=FacilityViewPage />
                    <Route path=path!("/hubs") view=HubList />
                    <Route path=path!("/hubs/:id") view=HubViewPage />
                </Routes>
            </Shell>
        </Router>
    }
}
