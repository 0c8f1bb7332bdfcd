use dioxus::prelude::*;

#[derive(Props)]
pub struct StackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub children: Element<'a>,
}

pub fn VStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element {
    let extra = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "vstack {extra}", &cx.props.children }
    ))
}

pub fn HStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element {
    let extra = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "hstack {extra}", &cx.props.children }
    ))
}

/// The bordered title every screen starts with
#[inline_props]
pub fn PageHeader<'a>(cx: Scope<'a>, title: String) -> Element<'a> {
    cx.render(rsx!(
        header {
            div { class: "page-header", h1 { "{title}" } }
        }
    ))
}
