use dioxus::prelude::*;

/// A labelled text field, `kind` is the input type
#[inline_props]
pub fn FormField<'a>(
    cx: Scope<'a>,
    label: &'a str,
    kind: &'a str,
    value: String,
    oninput: EventHandler<'a, String>,
) -> Element<'a> {
    cx.render(rsx!(
        div { class: "form-row",
            label { "{label}" }
            input {
                r#type: "{kind}",
                value: "{value}",
                autocomplete: "off",
                oninput: move |evt| oninput.call(evt.value.clone())
            }
        }
    ))
}

/// A dropdown over `(id, label)` pairs. Ids are positive, `selected: 0` and
/// the blank first entry mean nothing is picked.
#[inline_props]
pub fn Choice<'a>(
    cx: Scope<'a>,
    label: &'a str,
    options: Vec<(i32, String)>,
    selected: i32,
    onselect: EventHandler<'a, Option<i32>>,
) -> Element<'a> {
    let selected = *selected;
    let nothing_selected = selected <= 0;
    cx.render(rsx!(
        div { class: "form-row",
            label { "{label}" }
            select {
                onchange: move |evt| onselect.call(evt.value.parse().ok().filter(|id| *id > 0)),
                option { value: "", selected: "{nothing_selected}", "" }
                options.iter().map(|(id, name)| {
                    let is_selected = selected == *id;
                    rsx!(option { key: "{id}", value: "{id}", selected: "{is_selected}", "{name}" })
                })
            }
        }
    ))
}
