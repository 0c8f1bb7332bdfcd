use dioxus::prelude::*;

use super::LoginProps;
use crate::components::Callbacks;
use crate::loc;
use crate::store::ViewStore;
use crate::widgets::*;

#[inline_props]
pub fn Login<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let login = LoginProps::from_state(view_store);
    let username = use_state(cx, String::new);
    let password = use_state(cx, String::new);

    if login.checking_session {
        return cx.render(rsx!(Spinner { label: loc!("Sjekker innlogging") }));
    }

    let can_submit = !username.get().trim().is_empty() && !password.get().is_empty();

    cx.render(rsx!(
        div { class: "container",
            PageHeader { title: loc!("Ukelønn").to_string() }
            form {
                prevent_default: "onsubmit",
                onsubmit: move |_| {
                    if can_submit {
                        callbacks.on_login(username.get().trim().to_string(), password.get().clone());
                    }
                },
                VStack { class: "gap-2",
                    FormField {
                        label: loc!("Brukernavn:"),
                        kind: "text",
                        value: username.get().clone(),
                        oninput: move |value| username.set(value)
                    }
                    FormField {
                        label: loc!("Passord:"),
                        kind: "password",
                        value: password.get().clone(),
                        oninput: move |value| password.set(value)
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: "{!can_submit}",
                        loc!("Login")
                    }
                }
            }
            login.error.map(|error| rsx!(ErrorBox {
                content: error,
                ondismiss: move |_| callbacks.dismiss_error()
            }))
        }
    ))
}
