use std::cell::Cell;

use dioxus::prelude::*;

use crate::loc;
use crate::routes::Route;

/// Back to the screen that linked here, labelled with its `parentTitle`
#[inline_props]
pub fn BackLink<'a>(cx: Scope<'a>, title: String, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        button {
            class: "btn btn-block btn-primary mb-0 left-align-cell",
            onclick: move |_| onclick.call(()),
            span { class: "chevron", "‹" }
            " {title}"
        }
    ))
}

/// A full width link to a sub screen
#[inline_props]
pub fn ForwardLink<'a>(cx: Scope<'a>, title: &'a str, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        button {
            class: "btn btn-block btn-primary right-align-cell",
            onclick: move |_| onclick.call(()),
            "{title} "
            span { class: "chevron", "›" }
        }
    ))
}

#[inline_props]
pub fn LogoutButton<'a>(cx: Scope<'a>, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        button { class: "btn btn-default", onclick: move |_| onclick.call(()), loc!("Logout") }
    ))
}

#[inline_props]
pub fn TopLink<'a>(cx: Scope<'a>, onclick: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        a { class: "top-link", onclick: move |_| onclick.call(()), loc!("Tilbake til topp") }
    ))
}

/// Asks for `to` once per target, then shows a spinner until the route changes
#[inline_props]
pub fn Redirect<'a>(cx: Scope<'a>, to: Route, onredirect: EventHandler<'a, Route>) -> Element<'a> {
    let requested = cx.use_hook(|| Cell::new(None::<Route>));
    if requested.get() != Some(*to) {
        requested.set(Some(*to));
        log::debug!("redirect to {}", to.path());
        onredirect.call(*to);
    }
    cx.render(rsx!(super::Spinner {}))
}
