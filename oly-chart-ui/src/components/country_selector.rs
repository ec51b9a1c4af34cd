//! Dropdown selector for choosing the compared country.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CountrySelectorProps {
    /// Text shown above the dropdown
    #[props(default = String::new())]
    pub prompt: String,
}

/// Country dropdown selector.
/// Lists the engine's countries in first-seen order and selects on change.
#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let (countries, selected) = match state.engine.read().as_ref() {
        Some(engine) => (
            engine.countries().to_vec(),
            engine.selection().selected_country.clone().unwrap_or_default(),
        ),
        None => (Vec::new(), String::new()),
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if let Some(engine) = state.engine.write().as_mut() {
            engine.select_country(&value);
        }
    };

    rsx! {
        div {
            class: "country-selection",
            style: "display: inline-block; margin: 8px 16px 8px 0;",
            if !props.prompt.is_empty() {
                p { "{props.prompt}" }
            }
            select {
                id: "countryDropdown",
                style: "padding: 5px; border-radius: 5px; border: 1px solid #ccc;",
                onchange: on_change,
                for country in countries.iter() {
                    option {
                        value: "{country}",
                        selected: *country == selected,
                        "{country}"
                    }
                }
            }
        }
    }
}
