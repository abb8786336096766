use contracts::domain::hub::Hub;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos_router::components::A;
use serde::Deserialize;

const BASE_URL: &str = "/api/v1";

#[derive(Deserialize)]
struct Results<T> {
    results: Vec<T>,
}

async fn fetch_hubs() -> Result<Vec<Hub>, String> {
    let response: Results<Hub> = Request::get(&format!("{}/hubs", BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.results)
}

#[component]
pub fn HubList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Hub>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_hubs().await {
            Ok(hubs) => {
                set_items.set(hubs);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="list-container hub-list">
            <div class="list-header">
                <h2>"Hubs"</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <table class="table table--hubs">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Facilities"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|hub| {
                                let href = hub
                                    .to_string_id()
                                    .map(|id| format!("/hubs/{}", id))
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>
                                            <A href=href>{hub.name.text().to_string()}</A>
                                        </td>
                                        <td class="table__cell--right">{hub.facility_ids.len()}</td>
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
