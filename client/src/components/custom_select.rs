//! Native select bound to a string signal over a static option list.

use leptos::prelude::*;

use crate::state::fields::SelectOption;

/// Dropdown over `{value, label}` pairs; by convention the first option is
/// the empty-value placeholder, so clearing a selection persists `""`.
#[component]
pub fn CustomSelect(options: &'static [SelectOption], value: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            class="select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|opt| {
                    view! {
                        <option value=opt.value selected=move || value.get() == opt.value>
                            {opt.label}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
