//! Button toggling the reference country line.

use crate::state::AppState;
use dioxus::prelude::*;
use oly_data::REFERENCE_COUNTRY;

#[derive(Props, Clone, PartialEq)]
pub struct ReferenceToggleProps {
    /// Text shown above the button
    #[props(default = String::new())]
    pub prompt: String,
    pub button_text: String,
}

#[component]
pub fn ReferenceToggle(props: ReferenceToggleProps) -> Element {
    let mut state = use_context::<AppState>();
    let visible = state
        .engine
        .read()
        .as_ref()
        .is_some_and(|engine| engine.selection().reference_visible);

    let on_click = move |_: Event<MouseData>| {
        if let Some(engine) = state.engine.write().as_mut() {
            engine.toggle_reference();
        }
    };

    let title = if visible {
        format!("Hide {}", REFERENCE_COUNTRY)
    } else {
        format!("Show {}", REFERENCE_COUNTRY)
    };

    rsx! {
        div {
            class: "toggle-usa",
            style: "display: inline-block; margin: 8px 0;",
            if !props.prompt.is_empty() {
                p { "{props.prompt}" }
            }
            button {
                id: "toggleUSAButton",
                title: "{title}",
                style: "padding: 5px 10px; border-radius: 5px; border: 1px solid #ccc; background-color: #f0f0f0;",
                onclick: on_click,
                "{props.button_text}"
            }
        }
    }
}
