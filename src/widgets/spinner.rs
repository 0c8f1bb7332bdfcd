use dioxus::prelude::*;

/// Shown while a screen waits for the backend
#[inline_props]
pub fn Spinner(cx: Scope, label: Option<&'static str>) -> Element {
    cx.render(rsx!(
        div { class: "vstack gap-2 align-items-center",
            div { class: "loader" }
            label.map(|label| rsx!(span { class: "label-secondary", "{label}" }))
        }
    ))
}
