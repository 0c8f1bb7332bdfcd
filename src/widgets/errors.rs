use super::HStack;
use dioxus::prelude::*;

use crate::environment::types::Notification;
use crate::loc;

/// A backend or form error, dismissable
#[inline_props]
pub fn ErrorBox<'a>(cx: Scope<'a>, content: String, ondismiss: EventHandler<'a, ()>) -> Element<'a> {
    cx.render(rsx!(
        div { class: "error-box",
            HStack { class: "align-items-center gap-2",
                p { class: "grow", "{content}" }
                button {
                    class: "btn btn-default",
                    title: loc!("Lukk"),
                    onclick: move |_| ondismiss.call(()),
                    "×"
                }
            }
        }
    ))
}

#[inline_props]
pub fn NotificationBox<'a>(
    cx: Scope<'a>,
    notification: Notification,
    ondismiss: EventHandler<'a, ()>,
) -> Element<'a> {
    cx.render(rsx!(
        div { class: "notification-box",
            HStack { class: "align-items-center gap-2",
                div { class: "grow",
                    strong { "{notification.title}" }
                    p { "{notification.message}" }
                }
                button { class: "btn btn-default", onclick: move |_| ondismiss.call(()), "OK" }
            }
        }
    ))
}

/// Replaces the whole window when the app can't start
#[inline_props]
pub fn ErrorPage<'a>(cx: Scope<'a>, content: &'a str) -> Element<'a> {
    cx.render(rsx!(
        div { class: "container",
            h4 { loc!("Ukelønn kunne ikke starte") }
            p { "{content}" }
        }
    ))
}
