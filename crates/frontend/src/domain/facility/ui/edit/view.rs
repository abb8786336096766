use super::view_model::{parse_aliases, EditSection, FacilityEditViewModel};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::icons::icon;
use crate::shared::map::view::MapView;
use crate::shared::map::{feature_collection, StyleKey, VectorLayer};
use contracts::domain::facility::Facility;
use contracts::enums::{CapacityType, DayType, FacilityStatus, Usage};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

fn facility_layers(facility: &Facility) -> Vec<VectorLayer> {
    match &facility.location {
        Some(location) => vec![VectorLayer {
            name: "facility",
            style: StyleKey::SelectedFacility,
            features: feature_collection([location]),
        }],
        None => Vec::new(),
    }
}

#[component]
pub fn FacilityEdit(id: Option<i64>) -> impl IntoView {
    let vm = FacilityEditViewModel::new();
    vm.load(id);

    let vm_clone = vm.clone();

    view! {
        <div class="edit-container facility-edit">
            <div class="edit-header">
                <h2>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit facility" } else { "New facility" }
                    }
                </h2>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <Show
                when={
                    let vm = vm_clone.clone();
                    move || vm.loaded.get()
                }
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                {
                    let vm = vm_clone.clone();
                    move || {
                        let vm = vm.clone();
                        view! {
                            <EditNavi vm=vm.clone() />
                            <BasicsSection vm=vm.clone() />
                            <SectionBody vm=vm.clone() />
                            <EditActions vm=vm />
                        }
                    }
                }
            </Show>
        </div>
    }
}

#[component]
fn EditNavi(vm: FacilityEditViewModel) -> impl IntoView {
    view! {
        <nav class="edit-navi">
            {EditSection::ALL
                .into_iter()
                .map(|section| {
                    let vm_active = vm.clone();
                    let vm_click = vm.clone();
                    view! {
                        <button
                            class="edit-navi__item"
                            class:active=move || vm_active.section.get() == section
                            on:click=move |_| vm_click.section.set(section)
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Name, aliases, operator and status are visible in every section
#[component]
fn BasicsSection(vm: FacilityEditViewModel) -> impl IntoView {
    let vm_clone = vm.clone();

    view! {
        <div class="edit-form edit-form--basics">
            <div class="form-group">
                <label for="name-fi">"Name (fi)"</label>
                <input
                    type="text"
                    id="name-fi"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.facility.get().name.fi
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.facility.update(|f| f.name.fi = event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="name-sv">"Name (sv)"</label>
                <input
                    type="text"
                    id="name-sv"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.facility.get().name.sv.unwrap_or_default()
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            vm.facility
                                .update(|f| f.name.sv = (!value.is_empty()).then_some(value));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="name-en">"Name (en)"</label>
                <input
                    type="text"
                    id="name-en"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.facility.get().name.en.unwrap_or_default()
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            vm.facility
                                .update(|f| f.name.en = (!value.is_empty()).then_some(value));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="aliases">"Aliases"</label>
                <input
                    type="text"
                    id="aliases"
                    placeholder="Comma separated"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.facility.get().aliases_text()
                    }
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            vm.facility
                                .update(|f| f.aliases = parse_aliases(&event_target_value(&ev)));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="operator">"Operator"</label>
                <select
                    id="operator"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || {
                            vm.facility
                                .get()
                                .operator_id
                                .map(|id| id.to_string())
                                .unwrap_or_default()
                        }
                    }
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let id = event_target_value(&ev).parse::<i64>().ok();
                            vm.facility.update(|f| f.operator_id = id);
                        }
                    }
                >
                    <option value="">"Select operator"</option>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.operators
                                .get()
                                .into_iter()
                                .map(|operator| {
                                    view! {
                                        <option value=operator.id.to_string()>
                                            {operator.name.text().to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </select>
            </div>

            <div class="form-group">
                <label for="status">"Status"</label>
                <select
                    id="status"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.facility.get().status.wire_name()
                    }
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            if let Some(status) =
                                FacilityStatus::from_wire_name(&event_target_value(&ev))
                            {
                                vm.facility.update(|f| f.status = status);
                            }
                        }
                    }
                >
                    {FacilityStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! { <option value=status.wire_name()>{status.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when={
                let vm = vm_clone.clone();
                move || vm.facility.get().status != FacilityStatus::InOperation
            }>
                <div class="form-group">
                    <label for="status-until">"Until"</label>
                    <DateInput value=vm_clone.status_until id="status-until" />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SectionBody(vm: FacilityEditViewModel) -> impl IntoView {
    let vm_clone = vm.clone();
    move || match vm_clone.section.get() {
        EditSection::Location => {
            let layers = facility_layers(&vm_clone.facility.get_untracked());
            view! {
                <div class="edit-section edit-section--location">
                    <p class="edit-hint">"Draw the facility outline on the map."</p>
                    <MapView layers=layers />
                </div>
            }
            .into_any()
        }
        EditSection::Capacities => view! { <CapacitiesSection vm=vm_clone.clone() /> }.into_any(),
        EditSection::Pricing => view! { <PricingSection vm=vm_clone.clone() /> }.into_any(),
        EditSection::Services => view! { <ServicesSection vm=vm_clone.clone() /> }.into_any(),
        EditSection::Contacts => view! { <ContactsSection vm=vm_clone.clone() /> }.into_any(),
    }
}

#[component]
fn CapacitiesSection(vm: FacilityEditViewModel) -> impl IntoView {
    view! {
        <div class="edit-section edit-section--capacities">
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
                    {CapacityType::ALL
                        .into_iter()
                        .map(|capacity_type| {
                            let vm = vm.clone();
                            view! {
                                <tr>
                                    <td class="wdCapacityType">{capacity_type.label()}</td>
                                    <CapacityField
                                        vm=vm.clone()
                                        capacity_type=capacity_type
                                        field="built"
                                    />
                                    <CapacityField
                                        vm=vm.clone()
                                        capacity_type=capacity_type
                                        field="unknown"
                                    />
                                    <CapacityField vm=vm capacity_type=capacity_type field="available" />
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn CapacityField(
    vm: FacilityEditViewModel,
    capacity_type: CapacityType,
    field: &'static str,
) -> impl IntoView {
    let vm_clone = vm.clone();
    view! {
        <td>
            <input
                type="number"
                min="0"
                prop:value=move || {
                    vm_clone
                        .facility
                        .get()
                        .capacities
                        .get(&capacity_type)
                        .map(|c| c.field(field))
                        .unwrap_or(0)
                        .to_string()
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                    vm.facility.update(|f| {
                        let capacity = f.capacities.entry(capacity_type).or_default();
                        match field {
                            "built" => capacity.built = value,
                            "unknown" => capacity.unknown = value,
                            _ => capacity.available = value,
                        }
                    });
                }
            />
        </td>
    }
}

#[component]
fn PricingSection(vm: FacilityEditViewModel) -> impl IntoView {
    let vm_clone = vm.clone();

    view! {
        <div class="edit-section edit-section--pricing">
            <div class="pricing-toolbar">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.add_pricing_row()
                    }
                >
                    {icon("add")}
                    "Add row"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.pricing.with(|rows| rows.selected_count() == 0)
                    }
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.clone_pricing_rows()
                    }
                >
                    {icon("copy")}
                    "Clone selected"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.pricing.with(|rows| rows.selected_count() == 0)
                    }
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.remove_pricing_rows()
                    }
                >
                    {icon("delete")}
                    "Delete selected"
                </button>
            </div>

            <table class="table table--pricing">
                <thead>
                    <tr>
                        <TableHeaderCheckbox
                            all_selected={
                                let vm = vm_clone.clone();
                                Signal::derive(move || vm.pricing.with(|rows| rows.all_selected()))
                            }
                            has_rows={
                                let vm = vm_clone.clone();
                                Signal::derive(move || vm.pricing.with(|rows| rows.has_rows()))
                            }
                            on_change={
                                let vm = vm_clone.clone();
                                Callback::new(move |select_all| {
                                    if select_all {
                                        vm.select_all_pricing_rows();
                                    } else {
                                        vm.unselect_all_pricing_rows();
                                    }
                                })
                            }
                        />
                        <th>"Capacity type"</th>
                        <th>"Usage"</th>
                        <th>"Max capacity"</th>
                        <th>"Day type"</th>
                        <th>"From"</th>
                        <th>"Until"</th>
                        <th>"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.pricing
                                .with(|rows| {
                                    rows.rows()
                                        .iter()
                                        .map(|row| (row.local_id, row.pricing.clone()))
                                        .collect::<Vec<_>>()
                                })
                                .into_iter()
                                .map(|(local_id, pricing)| {
                                    view! {
                                        <PricingRowView
                                            vm=vm.clone()
                                            local_id=local_id
                                            pricing=pricing
                                        />
                                    }
                                })
                                .collect_view()
                        }
                    }
                </tbody>
            </table>

            <Show when={
                let vm = vm_clone.clone();
                move || !vm.pricing.with(|rows| rows.has_rows())
            }>
                <p class="edit-hint">"No pricing rows yet."</p>
            </Show>
        </div>
    }
}

#[component]
fn PricingRowView(
    vm: FacilityEditViewModel,
    local_id: i64,
    pricing: contracts::domain::facility::Pricing,
) -> impl IntoView {
    let vm_clone = vm.clone();

    view! {
        <tr class="pricing-row">
            <TableCheckbox
                checked={
                    let vm = vm_clone.clone();
                    Signal::derive(move || vm.pricing.with(|rows| rows.is_selected(local_id)))
                }
                on_change={
                    let vm = vm_clone.clone();
                    Callback::new(move |checked| {
                        vm.pricing.update(|rows| rows.set_selected(local_id, checked));
                    })
                }
            />
            <td>
                <select
                    prop:value=pricing.capacity_type.map(|ct| ct.wire_name()).unwrap_or_default()
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = CapacityType::from_wire_name(&event_target_value(&ev));
                            vm.pricing
                                .update(|rows| rows.update_row(local_id, |p| p.capacity_type = value));
                        }
                    }
                >
                    <option value="">""</option>
                    {CapacityType::ALL
                        .into_iter()
                        .map(|ct| view! { <option value=ct.wire_name()>{ct.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <select
                    prop:value=pricing.usage.map(|u| u.wire_name()).unwrap_or_default()
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = Usage::from_wire_name(&event_target_value(&ev));
                            vm.pricing.update(|rows| rows.update_row(local_id, |p| p.usage = value));
                        }
                    }
                >
                    <option value="">""</option>
                    {Usage::ALL
                        .into_iter()
                        .map(|u| view! { <option value=u.wire_name()>{u.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    prop:value=pricing.max_capacity.map(|c| c.to_string()).unwrap_or_default()
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = event_target_value(&ev).parse::<u32>().ok();
                            vm.pricing
                                .update(|rows| rows.update_row(local_id, |p| p.max_capacity = value));
                        }
                    }
                />
            </td>
            <td>
                <select
                    prop:value=pricing.day_type.map(|d| d.wire_name()).unwrap_or_default()
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = DayType::from_wire_name(&event_target_value(&ev));
                            vm.pricing
                                .update(|rows| rows.update_row(local_id, |p| p.day_type = value));
                        }
                    }
                >
                    <option value="">""</option>
                    {DayType::ALL
                        .into_iter()
                        .map(|d| view! { <option value=d.wire_name()>{d.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <input
                    type="text"
                    placeholder="7:00"
                    prop:value=pricing.time.from.clone().unwrap_or_default()
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            vm.pricing.update(|rows| {
                                rows.update_row(local_id, |p| {
                                    p.time.from = (!value.is_empty()).then_some(value.clone());
                                })
                            });
                        }
                    }
                />
            </td>
            <td>
                <input
                    type="text"
                    placeholder="18:00"
                    prop:value=pricing.time.until.clone().unwrap_or_default()
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            vm.pricing.update(|rows| {
                                rows.update_row(local_id, |p| {
                                    p.time.until = (!value.is_empty()).then_some(value.clone());
                                })
                            });
                        }
                    }
                />
            </td>
            <td>
                <input
                    type="text"
                    placeholder="2,00 €/h"
                    prop:value=pricing.price.clone().unwrap_or_default()
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            vm.pricing.update(|rows| {
                                rows.update_row(local_id, |p| {
                                    p.price = (!value.is_empty()).then_some(value.clone());
                                })
                            });
                        }
                    }
                />
            </td>
        </tr>
    }
}

#[component]
fn ServicesSection(vm: FacilityEditViewModel) -> impl IntoView {
    let vm_clone = vm.clone();

    view! {
        <div class="edit-section edit-section--services">
            <h3>"Services"</h3>
            {
                let vm = vm_clone.clone();
                move || {
                    vm.services
                        .get()
                        .into_iter()
                        .map(|service| {
                            let vm_checked = vm.clone();
                            let vm_toggle = vm.clone();
                            let id = service.id;
                            view! {
                                <label class="check-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            vm_checked.facility.get().services.contains(&id)
                                        }
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            vm_toggle.facility.update(|f| {
                                                f.services.retain(|s| *s != id);
                                                if checked {
                                                    f.services.push(id);
                                                }
                                            });
                                        }
                                    />
                                    {service.name.text().to_string()}
                                </label>
                            }
                        })
                        .collect_view()
                }
            }

            <h3>"Payment methods"</h3>
            {
                let vm = vm_clone.clone();
                move || {
                    vm.payment_methods
                        .get()
                        .into_iter()
                        .map(|method| {
                            let vm_checked = vm.clone();
                            let vm_toggle = vm.clone();
                            let id = method.id;
                            view! {
                                <label class="check-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            vm_checked.facility.get().payment_methods.contains(&id)
                                        }
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            vm_toggle.facility.update(|f| {
                                                f.payment_methods.retain(|m| *m != id);
                                                if checked {
                                                    f.payment_methods.push(id);
                                                }
                                            });
                                        }
                                    />
                                    {method.name.text().to_string()}
                                </label>
                            }
                        })
                        .collect_view()
                }
            }
        </div>
    }
}

#[component]
fn ContactsSection(vm: FacilityEditViewModel) -> impl IntoView {
    view! {
        <div class="edit-section edit-section--contacts">
            <ContactSelect vm=vm.clone() kind="emergency" label="Emergency" />
            <ContactSelect vm=vm.clone() kind="operator" label="Operator" />
            <ContactSelect vm=vm kind="service" label="Service" />
        </div>
    }
}

#[component]
fn ContactSelect(
    vm: FacilityEditViewModel,
    kind: &'static str,
    label: &'static str,
) -> impl IntoView {
    let vm_clone = vm.clone();
    let current = move |facility: &Facility| match kind {
        "emergency" => facility.contacts.emergency,
        "operator" => facility.contacts.operator,
        _ => facility.contacts.service,
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value={
                    let vm = vm_clone.clone();
                    move || {
                        current(&vm.facility.get())
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    }
                }
                on:change={
                    let vm = vm_clone.clone();
                    move |ev| {
                        let id = event_target_value(&ev).parse::<i64>().ok();
                        vm.facility.update(|f| match kind {
                            "emergency" => f.contacts.emergency = id,
                            "operator" => f.contacts.operator = id,
                            _ => f.contacts.service = id,
                        });
                    }
                }
            >
                <option value="">"No contact"</option>
                {
                    let vm = vm_clone.clone();
                    move || {
                        vm.contacts
                            .get()
                            .into_iter()
                            .map(|contact| {
                                view! {
                                    <option value=contact.id.to_string()>
                                        {contact.name.text().to_string()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }
                }
            </select>
        </div>
    }
}

#[component]
fn EditActions(vm: FacilityEditViewModel) -> impl IntoView {
    let navigate = use_navigate();
    let cancel_navigate = use_navigate();

    view! {
        <div class="edit-actions">
            <button
                class="btn btn-primary"
                on:click=move |_| {
                    let navigate = navigate.clone();
                    vm.save_command(Rc::new(move |id| {
                        navigate(&format!("/facilities/{}", id), Default::default());
                    }));
                }
            >
                {icon("save")}
                "Save"
            </button>
            <button
                class="btn btn-secondary"
                on:click=move |_| cancel_navigate("/facilities", Default::default())
            >
                {icon("cancel")}
                "Cancel"
            </button>
        </div>
    }
}
