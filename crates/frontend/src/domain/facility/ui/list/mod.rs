use contracts::domain::facility::Facility;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos_router::components::A;
use serde::Deserialize;

const BASE_URL: &str = "/api/v1";

#[derive(Deserialize)]
struct Results<T> {
    results: Vec<T>,
}

async fn fetch_facilities(name: Option<&str>) -> Result<Vec<Facility>, String> {
    let url = match name {
        Some(name) if !name.is_empty() => {
            format!("{}/facilities?name={}", BASE_URL, urlencoding::encode(name))
        }
        _ => format!("{}/facilities", BASE_URL),
    };
    let response: Results<Facility> = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.results)
}

#[derive(Clone, Debug)]
struct FacilityRow {
    id: String,
    name: String,
    aliases: String,
    status: &'static str,
    built: u32,
}

impl From<Facility> for FacilityRow {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.to_string_id().unwrap_or_default(),
            name: facility.name.text().to_string(),
            aliases: facility.aliases_text(),
            status: facility.status.label(),
            built: facility.total_built(),
        }
    }
}

#[component]
pub fn FacilityList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<FacilityRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());

    let fetch = move |name: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_facilities(Some(&name)).await {
                Ok(facilities) => {
                    set_items.set(facilities.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch(String::new());

    view! {
        <div class="list-container facility-list">
            <div class="list-header">
                <h2>"Facilities"</h2>
                <A href="/facilities/create" attr:class="btn btn-primary">
                    "Create facility"
                </A>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="list-filter">
                <input
                    type="search"
                    placeholder="Search by name"
                    prop:value=search
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_search.set(value.clone());
                        fetch(value);
                    }
                />
            </div>

            <table class="table table--facilities">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Aliases"</th>
                        <th>"Status"</th>
                        <th>"Built spaces"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>
                                            <A href=format!(
                                                "/facilities/{}",
                                                row.id,
                                            )>{row.name.clone()}</A>
                                        </td>
                                        <td>{row.aliases.clone()}</td>
                                        <td>{row.status}</td>
                                        <td class="table__cell--right">{row.built}</td>
                                        <td>
                                            <A href=format!(
                                                "/facilities/edit/{}",
                                                row.id,
                                            )>"Edit"</A>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
