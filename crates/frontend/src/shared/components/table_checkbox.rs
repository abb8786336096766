use leptos::prelude::*;

/// Row selection checkbox cell
///
/// Renders a `<td>` wrapping the checkbox; clicks do not bubble to the row.
#[component]
pub fn TableCheckbox(
    /// Checked state of this row
    checked: Signal<bool>,
    /// Called with the new state on change
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </td>
    }
}
