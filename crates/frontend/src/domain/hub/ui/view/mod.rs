use contracts::domain::facility::{aggregate_capacities, CapacitySummary, Facility};
use contracts::domain::hub::Hub;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos_router::components::A;
use serde::Deserialize;

use crate::domain::facility::ui::view::CapacityTable;
use crate::shared::map::view::MapView;
use crate::shared::map::{feature_collection, StyleKey, VectorLayer};

const BASE_URL: &str = "/api/v1";

#[derive(Deserialize)]
struct Results<T> {
    results: Vec<T>,
}

async fn fetch_hub(id: i64) -> Result<Hub, String> {
    Request::get(&format!("{}/hubs/{}", BASE_URL, id))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_hub_facilities(facility_ids: &[i64]) -> Result<Vec<Facility>, String> {
    if facility_ids.is_empty() {
        return Ok(Vec::new());
    }
    let ids = facility_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let response: Results<Facility> =
        Request::get(&format!("{}/facilities?ids={}", BASE_URL, ids))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;
    Ok(response.results)
}

/// Hub page data: the hub plus its facilities and their capacity total.
///
/// The summary is absent for a hub without facilities; the fold has no
/// seed in that case and nothing is rendered.
#[derive(Clone)]
struct HubDetails {
    hub: Hub,
    facilities: Vec<Facility>,
    summary: Option<CapacitySummary>,
}

async fn fetch_details(id: i64) -> Result<HubDetails, String> {
    let hub = fetch_hub(id).await?;
    let facilities = fetch_hub_facilities(&hub.facility_ids).await?;
    let summary = if facilities.is_empty() {
        None
    } else {
        Some(
            aggregate_capacities(facilities.iter().map(|f| &f.capacities))
                .map_err(|e| e.to_string())?,
        )
    };
    Ok(HubDetails {
        hub,
        facilities,
        summary,
    })
}

fn hub_layers(hub: &Hub, facilities: &[Facility]) -> Vec<VectorLayer> {
    let mut layers = Vec::new();
    let facility_geometries: Vec<&serde_json::Value> =
        facilities.iter().filter_map(|f| f.location.as_ref()).collect();
    if !facility_geometries.is_empty() {
        layers.push(VectorLayer {
            name: "facilities",
            style: StyleKey::Facility,
            features: feature_collection(facility_geometries),
        });
    }
    if let Some(location) = &hub.location {
        layers.push(VectorLayer {
            name: "hub",
            style: StyleKey::Hub,
            features: feature_collection([location]),
        });
    }
    layers
}

#[component]
pub fn HubView(id: i64) -> impl IntoView {
    let (details, set_details) = signal::<Option<HubDetails>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_details(id).await {
            Ok(d) => set_details.set(Some(d)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="view-container wdHubView">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                details
                    .get()
                    .map(|details| {
                        let layers = hub_layers(&details.hub, &details.facilities);
                        view! {
                            <div class="view-header">
                                <h2 class="wdHubName">{details.hub.name.text().to_string()}</h2>
                            </div>

                            {details
                                .summary
                                .as_ref()
                                .map(|summary| {
                                    view! {
                                        <CapacityTable capacities={summary
                                            .iter()
                                            .map(|(ct, c)| (*ct, *c))
                                            .collect::<Vec<_>>()} />
                                    }
                                })}

                            <h3>"Facilities"</h3>
                            <ul class="hub-facilities">
                                {details
                                    .facilities
                                    .clone()
                                    .into_iter()
                                    .map(|facility| {
                                        let href = facility
                                            .to_string_id()
                                            .map(|id| format!("/facilities/{}", id))
                                            .unwrap_or_default();
                                        view! {
                                            <li>
                                                <A href=href>
                                                    {facility.name.text().to_string()}
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>

                            <MapView read_only=true layers=layers />

                            <div class="view-actions">
                                <A href="/hubs" attr:class="btn btn-secondary">
                                    "Back to list"
                                </A>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
