use dioxus::prelude::*;

use super::{editable, TypeAdminProps, TypeKind};
use crate::components::{forms, Callbacks};
use crate::loc;
use crate::routes::Route;
use crate::store::ViewStore;
use crate::widgets::*;

#[inline_props]
pub fn AdminJobtypes<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(TypeHub { view_store: view_store, kind: TypeKind::Job }))
}

#[inline_props]
pub fn AdminJobtypesModify<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(ModifyType { view_store: view_store, kind: TypeKind::Job }))
}

#[inline_props]
pub fn AdminJobtypesCreate<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(CreateType { view_store: view_store, kind: TypeKind::Job }))
}

/// Links to modifying and creating payment types
#[inline_props]
pub fn AdminPaymenttypes<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(TypeHub { view_store: view_store, kind: TypeKind::Payment }))
}

#[inline_props]
pub fn AdminPaymenttypesModify<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(ModifyType { view_store: view_store, kind: TypeKind::Payment }))
}

#[inline_props]
pub fn AdminPaymenttypesCreate<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    cx.render(rsx!(CreateType { view_store: view_store, kind: TypeKind::Payment }))
}

#[inline_props]
fn TypeHub<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>, kind: TypeKind) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let kind = *kind;
    let labels = kind.labels();

    cx.render(rsx!(
        div {
            BackLink {
                title: labels.back.to_string(),
                onclick: move |_| callbacks.navigate_to(Route::Home)
            }
            PageHeader { title: labels.hub_title.to_string() }
            div { class: "container",
                ForwardLink {
                    title: labels.modify,
                    onclick: move |_| callbacks.navigate_to(kind.modify_route())
                }
                ForwardLink {
                    title: labels.create,
                    onclick: move |_| callbacks.navigate_to(kind.create_route())
                }
            }
            br {}
            LogoutButton { onclick: move |_| callbacks.on_logout() }
            br {}
            TopLink { onclick: move |_| callbacks.navigate_to(Route::Home) }
        }
    ))
}

#[inline_props]
fn ModifyType<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>, kind: TypeKind) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let kind = *kind;
    let props = TypeAdminProps::from_state(view_store, kind);
    let selected = use_state(cx, || None::<i32>);
    let name = use_state(cx, String::new);
    let amount = use_state(cx, String::new);
    let invalid = use_state(cx, || None::<&'static str>);

    let save = move || {
        let Some(id) = *selected.get() else {
            invalid.set(Some(loc!("Velg en type")));
            return;
        };
        match forms::transaction_type(id, name.get(), amount.get(), kind.is_work()) {
            Ok(changed) => {
                invalid.set(None);
                callbacks.send(kind.modify(changed));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };

    cx.render(rsx!(
        div {
            BackLink {
                title: kind.labels().hub_title.to_string(),
                onclick: move |_| callbacks.navigate_to(kind.hub())
            }
            PageHeader { title: kind.labels().modify.to_string() }
            div { class: "container",
                Choice {
                    label: loc!("Velg type"),
                    options: props.options,
                    selected: selected.get().unwrap_or_default(),
                    onselect: move |id| {
                        let (current_name, current_amount) = editable(view_store, kind, id);
                        selected.set(id);
                        name.set(current_name);
                        amount.set(current_amount);
                    }
                }
                TypeFields { name: name, amount: amount }
                button { class: "btn btn-primary", onclick: move |_| save(), loc!("Lagre endringer") }
                invalid.get().map(|reason| rsx!(ErrorBox {
                    content: reason.to_string(),
                    ondismiss: move |_| invalid.set(None)
                }))
            }
            LogoutButton { onclick: move |_| callbacks.on_logout() }
        }
    ))
}

#[inline_props]
fn CreateType<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>, kind: TypeKind) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let kind = *kind;
    let name = use_state(cx, String::new);
    let amount = use_state(cx, String::new);
    let invalid = use_state(cx, || None::<&'static str>);

    let create = move || match forms::transaction_type(0, name.get(), amount.get(), kind.is_work()) {
        Ok(created) => {
            invalid.set(None);
            name.set(String::new());
            amount.set(String::new());
            callbacks.send(kind.create(created));
        }
        Err(reason) => invalid.set(Some(reason)),
    };

    cx.render(rsx!(
        div {
            BackLink {
                title: kind.labels().hub_title.to_string(),
                onclick: move |_| callbacks.navigate_to(kind.hub())
            }
            PageHeader { title: kind.labels().create.to_string() }
            div { class: "container",
                TypeFields { name: name, amount: amount }
                button { class: "btn btn-primary", onclick: move |_| create(), loc!("Lag ny") }
                invalid.get().map(|reason| rsx!(ErrorBox {
                    content: reason.to_string(),
                    ondismiss: move |_| invalid.set(None)
                }))
            }
            LogoutButton { onclick: move |_| callbacks.on_logout() }
        }
    ))
}

#[inline_props]
fn TypeFields<'a>(
    cx: Scope<'a>,
    name: &'a UseState<String>,
    amount: &'a UseState<String>,
) -> Element<'a> {
    cx.render(rsx!(
        FormField {
            label: loc!("Navn"),
            kind: "text",
            value: name.get().clone(),
            oninput: move |value| name.set(value)
        }
        FormField {
            label: loc!("Standardbeløp"),
            kind: "text",
            value: amount.get().clone(),
            oninput: move |value| amount.set(value)
        }
    ))
}
