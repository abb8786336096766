use crate::shared::date_utils::{format_display_date, parse_display_date};
use chrono::NaiveDate;
use leptos::prelude::*;

/// Free-text date input bound to the fixed `d.M.yyyy` display format
///
/// Text that does not parse marks the field invalid and leaves the bound
/// value untouched; clearing the field clears the value. Leaving the field
/// re-formats valid input to the canonical display form.
#[component]
pub fn DateInput(
    value: RwSignal<Option<NaiveDate>>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let (text, set_text) = signal(
        value
            .get_untracked()
            .map(format_display_date)
            .unwrap_or_default(),
    );
    let (invalid, set_invalid) = signal(false);

    view! {
        <input
            type="text"
            id=id
            class="date-input"
            class=("date-input--invalid", invalid)
            placeholder="d.M.yyyy"
            prop:value=text
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                set_text.set(raw.clone());
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    value.set(None);
                    set_invalid.set(false);
                } else if let Some(date) = parse_display_date(trimmed) {
                    value.set(Some(date));
                    set_invalid.set(false);
                } else {
                    set_invalid.set(true);
                }
            }
            on:blur=move |_| {
                if !invalid.get_untracked() {
                    set_text.set(
                        value
                            .get_untracked()
                            .map(format_display_date)
                            .unwrap_or_default(),
                    );
                }
            }
        />
    }
}
