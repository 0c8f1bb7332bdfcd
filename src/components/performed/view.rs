use dioxus::prelude::*;

use super::HistoryProps;
use crate::components::Callbacks;
use crate::loc;
use crate::routes::Route;
use crate::store::ViewStore;
use crate::widgets::*;

#[inline_props]
pub fn PerformedJobs<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let history = HistoryProps::jobs(view_store);
    let title = format!("{} {}", loc!("Utførte jobber for"), history.first_name);
    let callbacks = Callbacks::for_store(cx, view_store);
    cx.render(rsx!(TransactionHistory {
        callbacks: callbacks,
        title: title,
        heading: loc!("Jobber"),
        show_paid_out: true,
        history: history
    }))
}

#[inline_props]
pub fn PerformedPayments<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let history = HistoryProps::payments(view_store);
    let title = format!("{} {}", loc!("Utbetalinger til"), history.first_name);
    let callbacks = Callbacks::for_store(cx, view_store);
    cx.render(rsx!(TransactionHistory {
        callbacks: callbacks,
        title: title,
        heading: loc!("Utbetalinger"),
        show_paid_out: false,
        history: history
    }))
}

#[inline_props]
fn TransactionHistory<'a>(
    cx: Scope<'a>,
    callbacks: Callbacks<'a>,
    title: String,
    heading: &'static str,
    show_paid_out: bool,
    history: HistoryProps,
) -> Element<'a> {
    cx.render(rsx!(
        div {
            BackLink {
                title: history.parent_title.clone(),
                onclick: move |_| callbacks.navigate_to(Route::Home)
            }
            PageHeader { title: title.clone() }
            TransactionTable { heading: heading, rows: &history.rows, show_paid_out: *show_paid_out }
            LogoutButton { onclick: move |_| callbacks.on_logout() }
            br {}
            TopLink { onclick: move |_| callbacks.navigate_to(Route::Home) }
        }
    ))
}
