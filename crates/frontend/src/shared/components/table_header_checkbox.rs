use leptos::prelude::*;

/// Select-all checkbox cell for a table header
///
/// Checked when every row is selected; clicking toggles between select-all
/// and unselect-all.
#[component]
pub fn TableHeaderCheckbox(
    /// Whether every current row is selected
    all_selected: Signal<bool>,
    /// Whether there are rows to select at all
    has_rows: Signal<bool>,
    /// Called with `true` for select-all, `false` for unselect-all
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__cell table__cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=Signal::derive(move || has_rows.get() && all_selected.get())
                prop:disabled=Signal::derive(move || !has_rows.get())
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </th>
    }
}
