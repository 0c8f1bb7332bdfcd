use dioxus::prelude::*;

use super::{default_amount, UserProps, USER_TITLE};
use crate::components::{forms, Callbacks};
use crate::helper::format_date;
use crate::loc;
use crate::routes::Route;
use crate::store::{Action, ViewStore};
use crate::widgets::*;

#[inline_props]
pub fn User<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let user = UserProps::from_state(view_store);
    let jobtype = use_state(cx, || None::<i32>);
    let amount = use_state(cx, String::new);
    let date = use_state(cx, || format_date(&chrono::Utc::now()));
    let invalid = use_state(cx, || None::<&'static str>);

    let title = format!("{} {}", loc!("Ukelønn for"), user.account.first_name);
    let balance = format!("{} {}", loc!("Til gode:"), user.balance);
    let account = user.account;
    let register = move || {
        match forms::performed_transaction(&account, *jobtype.get(), amount.get(), date.get()) {
            Ok(job) => {
                invalid.set(None);
                jobtype.set(None);
                amount.set(String::new());
                callbacks.send(Action::RegisterJobRequest(job));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };

    cx.render(rsx!(
        div {
            PageHeader { title: title }
            div { class: "container",
                p { "{balance}" }
                Choice {
                    label: loc!("Velg jobb"),
                    options: user.jobtypes,
                    selected: jobtype.get().unwrap_or_default(),
                    onselect: move |id| {
                        jobtype.set(id);
                        amount.set(default_amount(&view_store.jobtypes, id));
                    }
                }
                FormField {
                    label: loc!("Beløp"),
                    kind: "text",
                    value: amount.get().clone(),
                    oninput: move |value| amount.set(value)
                }
                FormField {
                    label: loc!("Dato"),
                    kind: "date",
                    value: date.get().clone(),
                    oninput: move |value| date.set(value)
                }
                button { class: "btn btn-primary", onclick: move |_| register(), loc!("Registrer jobb") }
                invalid.get().map(|reason| rsx!(ErrorBox {
                    content: reason.to_string(),
                    ondismiss: move |_| invalid.set(None)
                }))
            }
            ForwardLink {
                title: loc!("Utførte jobber"),
                onclick: move |_| callbacks.navigate(Route::PerformedJobs.with_parent_title(USER_TITLE))
            }
            ForwardLink {
                title: loc!("Siste utbetalinger til bruker"),
                onclick: move |_| {
                    callbacks.navigate(Route::PerformedPayments.with_parent_title(USER_TITLE))
                }
            }
            ForwardLink {
                title: loc!("Statistikk"),
                onclick: move |_| callbacks.navigate(Route::Statistics.with_parent_title(USER_TITLE))
            }
            br {}
            LogoutButton { onclick: move |_| callbacks.on_logout() }
        }
    ))
}
