use contracts::domain::facility::{Capacity, Facility};
use contracts::enums::CapacityType;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::map::view::MapView;
use crate::shared::map::{feature_collection, StyleKey, VectorLayer};

const BASE_URL: &str = "/api/v1";

async fn fetch_facility(id: i64) -> Result<Facility, String> {
    Request::get(&format!("{}/facilities/{}", BASE_URL, id))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Test-automation hook class of one capacity value cell, e.g. `wdCARbuilt`
pub fn capacity_cell_class(capacity_type: CapacityType, field: &str) -> String {
    format!("wd{}{}", capacity_type.wire_name(), field)
}

#[component]
pub fn FacilityView(id: i64) -> impl IntoView {
    let (facility, set_facility) = signal::<Option<Facility>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_facility(id).await {
            Ok(f) => set_facility.set(Some(f)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="view-container wdFacilityView">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                facility
                    .get()
                    .map(|facility| {
                        let layers = match &facility.location {
                            Some(location) => {
                                vec![VectorLayer {
                                    name: "facility",
                                    style: StyleKey::Facility,
                                    features: feature_collection([location]),
                                }]
                            }
                            None => Vec::new(),
                        };
                        let edit_href = facility
                            .to_string_id()
                            .map(|id| format!("/facilities/edit/{}", id))
                            .unwrap_or_default();

                        view! {
                            <div class="view-header">
                                <h2 class="wdFacilityName">{facility.name.text().to_string()}</h2>
                                <span class="view-status">{facility.status.label()}</span>
                            </div>

                            <p class="wdAliases">{facility.aliases_text()}</p>

                            <CapacityTable capacities={facility
                                .capacities
                                .clone()
                                .into_iter()
                                .collect::<Vec<_>>()} />

                            <MapView read_only=true layers=layers />

                            <div class="view-actions">
                                <A href=edit_href attr:class="btn btn-secondary">
                                    "Edit"
                                </A>
                                <A href="/facilities" attr:class="btn btn-secondary">
                                    "Back to list"
                                </A>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Per-type capacity table shared by the facility and hub views
#[component]
pub fn CapacityTable(capacities: Vec<(CapacityType, Capacity)>) -> impl IntoView {
    view! {
        <table class="table table--capacities">
            <thead>
                <tr>
                    <th>"Capacity type"</th>
                    <th>"Built"</th>
                    <th>"Unknown"</th>
                    <th>"Available"</th>
                </tr>
            </thead>
            <tbody>
                {capacities
                    .into_iter()
                    .map(|(capacity_type, capacity)| {
                        view! {
                            <tr>
                                <td class="wdCapacityType">{capacity_type.label()}</td>
                                {Capacity::FIELDS
                                    .into_iter()
                                    .map(|field| {
                                        view! {
                                            <td class=capacity_cell_class(capacity_type, field)>
                                                {capacity.field(field).to_string()}
                                            </td>
                                        }
                                    })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_cell_classes_concatenate_type_and_field() {
        assert_eq!(capacity_cell_class(CapacityType::Car, "built"), "wdCARbuilt");
        assert_eq!(
            capacity_cell_class(CapacityType::BicycleSecureSpace, "available"),
            "wdBICYCLE_SECURE_SPACEavailable"
        );
    }

    #[test]
    fn capacity_values_render_as_plain_decimals() {
        let capacity = Capacity {
            built: 17,
            unknown: 0,
            available: 3,
        };
        let texts: Vec<String> = Capacity::FIELDS
            .into_iter()
            .map(|field| capacity.field(field).to_string())
            .collect();
        assert_eq!(texts, vec!["17", "0", "3"]);
    }
}
