use dioxus::prelude::*;

use super::{find_job, jobs_to_delete, JobFields, JobsAdminProps};
use crate::components::admin::{find_account, ADMIN_TITLE};
use crate::components::{forms, Callbacks};
use crate::loc;
use crate::routes::Route;
use crate::store::{Action, ViewStore};
use crate::widgets::*;

/// Switches the account whose jobs are shown
#[inline_props]
fn AccountPicker<'a>(
    cx: Scope<'a>,
    view_store: &'a ViewStore<'a>,
    callbacks: Callbacks<'a>,
    accounts: Vec<(i32, String)>,
) -> Element<'a> {
    cx.render(rsx!(Choice {
        label: loc!("Velg konto"),
        options: accounts.clone(),
        selected: view_store.account.account_id,
        onselect: move |id| {
            if let Some(account) = find_account(view_store, id) {
                let account_id = account.account_id;
                callbacks.select_account(account);
                callbacks.send(Action::RecentJobsRequest(account_id));
            }
        }
    }))
}

#[inline_props]
pub fn AdminJobsDelete<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let props = JobsAdminProps::from_state(view_store);
    let ticked = use_state(cx, im::OrdSet::<i32>::new);

    let account = props.account;
    let delete = move || {
        if let Some(jobs) = jobs_to_delete(&account, ticked.get().iter().copied()) {
            ticked.set(im::OrdSet::new());
            callbacks.send(Action::DeleteJobsRequest(jobs));
        }
    };

    cx.render(rsx!(
        div {
            BackLink {
                title: ADMIN_TITLE.to_string(),
                onclick: move |_| callbacks.navigate_to(Route::Admin)
            }
            PageHeader { title: loc!("Slett jobber").to_string() }
            div { class: "container",
                AccountPicker { view_store: view_store, callbacks: callbacks, accounts: props.accounts }
                table { class: "table",
                    tbody {
                        props.jobs.iter().map(|row| {
                            let id = row.id;
                            let is_ticked = ticked.get().contains(&id);
                            rsx!(
                                tr { key: "{row.id}",
                                    td {
                                        input {
                                            r#type: "checkbox",
                                            checked: "{is_ticked}",
                                            oninput: move |_| {
                                                let mut next = ticked.get().clone();
                                                if next.remove(&id).is_none() {
                                                    next.insert(id);
                                                }
                                                ticked.set(next);
                                            }
                                        }
                                    }
                                    td { class: "transaction-table-col", "{row.date}" }
                                    td { class: "transaction-table-col", "{row.name}" }
                                    td { class: "transaction-table-col", "{row.amount}" }
                                }
                            )
                        })
                    }
                }
                button { class: "btn btn-primary", onclick: move |_| delete(), loc!("Slett merkede jobber") }
            }
            LogoutButton { onclick: move |_| callbacks.on_logout() }
        }
    ))
}

#[inline_props]
pub fn AdminJobsEdit<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let props = JobsAdminProps::from_state(view_store);
    let job_id = use_state(cx, || None::<i32>);
    let fields = use_state(cx, JobFields::default);
    let invalid = use_state(cx, || None::<&'static str>);

    let account = props.account;
    let save = move || {
        let Some(job) = find_job(view_store, *job_id.get()) else {
            invalid.set(Some(loc!("Velg en jobb")));
            return;
        };
        let JobFields {
            jobtype,
            amount,
            date,
        } = fields.get();
        match forms::updated_transaction(&job, &account, *jobtype, amount, date) {
            Ok(updated) => {
                invalid.set(None);
                callbacks.send(Action::UpdateJobRequest(updated));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };
    let job_options: Vec<(i32, String)> = props
        .jobs
        .iter()
        .map(|row| (row.id, format!("{} {}", row.date, row.name)))
        .collect();

    cx.render(rsx!(
        div {
            BackLink {
                title: ADMIN_TITLE.to_string(),
                onclick: move |_| callbacks.navigate_to(Route::Admin)
            }
            PageHeader { title: loc!("Endre jobber").to_string() }
            div { class: "container",
                AccountPicker { view_store: view_store, callbacks: callbacks, accounts: props.accounts }
                Choice {
                    label: loc!("Velg jobb"),
                    options: job_options,
                    selected: job_id.get().unwrap_or_default(),
                    onselect: move |id| {
                        job_id.set(id);
                        let picked = find_job(view_store, id);
                        fields.set(picked.as_ref().map(JobFields::from).unwrap_or_default());
                    }
                }
                Choice {
                    label: loc!("Jobbtype"),
                    options: props.jobtypes,
                    selected: fields.get().jobtype.unwrap_or_default(),
                    onselect: move |jobtype| fields.set(JobFields { jobtype, ..fields.get().clone() })
                }
                FormField {
                    label: loc!("Beløp"),
                    kind: "text",
                    value: fields.get().amount.clone(),
                    oninput: move |amount| fields.set(JobFields { amount, ..fields.get().clone() })
                }
                FormField {
                    label: loc!("Dato"),
                    kind: "date",
                    value: fields.get().date.clone(),
                    oninput: move |date| fields.set(JobFields { date, ..fields.get().clone() })
                }
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
