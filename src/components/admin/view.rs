use dioxus::prelude::*;

use super::{find_account, AdminProps, ADMIN_TITLE};
use crate::components::{forms, Callbacks};
use crate::helper::format_amount;
use crate::loc;
use crate::routes::Route;
use crate::store::{Action, ViewStore};
use crate::widgets::*;

#[inline_props]
pub fn Admin<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let admin = AdminProps::from_state(view_store);
    let paymenttype = use_state(cx, || None::<i32>);
    let amount = use_state(cx, String::new);
    let invalid = use_state(cx, || None::<&'static str>);

    let balance = format!("{} {}", loc!("Til gode:"), admin.balance);
    let account = admin.account;
    let register = move || {
        // Payments are always registered for today
        match forms::performed_transaction(&account, *paymenttype.get(), amount.get(), "") {
            Ok(payment) => {
                invalid.set(None);
                amount.set(String::new());
                callbacks.send(Action::RegisterPaymentRequest(payment));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };
    let link = move |route: Route| callbacks.navigate(route.with_parent_title(ADMIN_TITLE));

    cx.render(rsx!(
        div {
            PageHeader { title: loc!("Ukelønn admin").to_string() }
            div { class: "container",
                Choice {
                    label: loc!("Velg hvem det skal betales til"),
                    options: admin.accounts,
                    selected: view_store.account.account_id,
                    onselect: move |id| {
                        if let Some(account) = find_account(view_store, id) {
                            amount.set(format_amount(account.balance));
                            callbacks.select_account(account);
                        }
                    }
                }
                p { "{balance}" }
                Choice {
                    label: loc!("Type utbetaling"),
                    options: admin.paymenttypes,
                    selected: paymenttype.get().unwrap_or_default(),
                    onselect: move |id| paymenttype.set(id)
                }
                FormField {
                    label: loc!("Beløp"),
                    kind: "text",
                    value: amount.get().clone(),
                    oninput: move |value| amount.set(value)
                }
                button { class: "btn btn-primary", onclick: move |_| register(), loc!("Registrer betaling") }
                invalid.get().map(|reason| rsx!(ErrorBox {
                    content: reason.to_string(),
                    ondismiss: move |_| invalid.set(None)
                }))
            }
            ForwardLink { title: loc!("Utførte jobber"), onclick: move |_| link(Route::PerformedJobs) }
            ForwardLink { title: loc!("Utbetalinger"), onclick: move |_| link(Route::PerformedPayments) }
            ForwardLink { title: loc!("Statistikk"), onclick: move |_| link(Route::Statistics) }
            ForwardLink { title: loc!("Administrer jobbtyper"), onclick: move |_| link(Route::AdminJobtypes) }
            ForwardLink { title: loc!("Slett jobber"), onclick: move |_| link(Route::AdminJobsDelete) }
            ForwardLink { title: loc!("Endre jobber"), onclick: move |_| link(Route::AdminJobsEdit) }
            ForwardLink {
                title: loc!("Administrer betalingstyper"),
                onclick: move |_| link(Route::AdminPaymenttypes)
            }
            ForwardLink { title: loc!("Administrer brukere"), onclick: move |_| link(Route::AdminUsers) }
            br {}
            LogoutButton { onclick: move |_| callbacks.on_logout() }
        }
    ))
}
