//! Explanatory paragraphs shown next to the chart controls.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartNotesProps {
    pub notes: Vec<String>,
}

#[component]
pub fn ChartNotes(props: ChartNotesProps) -> Element {
    rsx! {
        for note in props.notes.iter() {
            div {
                class: "country-selection",
                p {
                    style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "{note}"
                }
            }
        }
    }
}
