use dioxus::prelude::*;

use super::{find_user, UsersProps};
use crate::components::admin::ADMIN_TITLE;
use crate::components::{forms, Callbacks};
use crate::environment::types::User;
use crate::loc;
use crate::routes::Route;
use crate::store::{Action, ViewStore};
use crate::widgets::*;

const USERS_TITLE: &str = "Administrer brukere";

#[inline_props]
pub fn AdminUsers<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    cx.render(rsx!(
        div {
            BackLink {
                title: ADMIN_TITLE.to_string(),
                onclick: move |_| callbacks.navigate_to(Route::Admin)
            }
            PageHeader { title: loc!(USERS_TITLE).to_string() }
            div { class: "container",
                ForwardLink {
                    title: loc!("Endre brukere"),
                    onclick: move |_| callbacks.navigate_to(Route::AdminUsersModify)
                }
                ForwardLink {
                    title: loc!("Endre passord"),
                    onclick: move |_| callbacks.navigate_to(Route::AdminUsersPassword)
                }
                ForwardLink {
                    title: loc!("Legg til ny bruker"),
                    onclick: move |_| callbacks.navigate_to(Route::AdminUsersCreate)
                }
            }
            br {}
            LogoutButton { onclick: move |_| callbacks.on_logout() }
            br {}
            TopLink { onclick: move |_| callbacks.navigate_to(Route::Home) }
        }
    ))
}

#[derive(Clone, Default)]
struct UserFields {
    username: String,
    email: String,
    firstname: String,
    lastname: String,
}

impl From<User> for UserFields {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            firstname: user.firstname,
            lastname: user.lastname,
        }
    }
}

impl UserFields {
    fn validate(&self, user_id: i32) -> Result<User, &'static str> {
        forms::user(user_id, &self.username, &self.email, &self.firstname, &self.lastname)
    }
}

#[inline_props]
fn UserForm<'a>(cx: Scope<'a>, fields: &'a UseState<UserFields>) -> Element<'a> {
    let current = fields.get();
    cx.render(rsx!(
        FormField {
            label: loc!("Brukernavn"),
            kind: "text",
            value: current.username.clone(),
            oninput: move |username| fields.set(UserFields { username, ..fields.get().clone() })
        }
        FormField {
            label: loc!("Epostadresse"),
            kind: "email",
            value: current.email.clone(),
            oninput: move |email| fields.set(UserFields { email, ..fields.get().clone() })
        }
        FormField {
            label: loc!("Fornavn"),
            kind: "text",
            value: current.firstname.clone(),
            oninput: move |firstname| fields.set(UserFields { firstname, ..fields.get().clone() })
        }
        FormField {
            label: loc!("Etternavn"),
            kind: "text",
            value: current.lastname.clone(),
            oninput: move |lastname| fields.set(UserFields { lastname, ..fields.get().clone() })
        }
    ))
}

#[inline_props]
fn PasswordFields<'a>(
    cx: Scope<'a>,
    password: &'a UseState<String>,
    password2: &'a UseState<String>,
) -> Element<'a> {
    cx.render(rsx!(
        FormField {
            label: loc!("Passord"),
            kind: "password",
            value: password.get().clone(),
            oninput: move |value| password.set(value)
        }
        FormField {
            label: loc!("Gjenta passord"),
            kind: "password",
            value: password2.get().clone(),
            oninput: move |value| password2.set(value)
        }
    ))
}

#[inline_props]
pub fn AdminUsersModify<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let props = UsersProps::from_state(view_store);
    let user_id = use_state(cx, || None::<i32>);
    let fields = use_state(cx, UserFields::default);
    let invalid = use_state(cx, || None::<&'static str>);

    let save = move || {
        let Some(id) = *user_id.get() else {
            invalid.set(Some(loc!("Velg en bruker")));
            return;
        };
        match fields.get().validate(id) {
            Ok(user) => {
                invalid.set(None);
                callbacks.send(Action::ModifyUserRequest(user));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };

    cx.render(rsx!(
        div {
            BackLink {
                title: loc!(USERS_TITLE).to_string(),
                onclick: move |_| callbacks.navigate_to(Route::AdminUsers)
            }
            PageHeader { title: loc!("Endre brukere").to_string() }
            div { class: "container",
                Choice {
                    label: loc!("Velg bruker"),
                    options: props.users,
                    selected: user_id.get().unwrap_or_default(),
                    onselect: move |id| {
                        user_id.set(id);
                        let picked = find_user(view_store, id);
                        fields.set(picked.map(UserFields::from).unwrap_or_default());
                    }
                }
                UserForm { fields: fields }
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
pub fn AdminUsersCreate<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let fields = use_state(cx, UserFields::default);
    let password = use_state(cx, String::new);
    let password2 = use_state(cx, String::new);
    let invalid = use_state(cx, || None::<&'static str>);

    let create = move || {
        let created = fields
            .get()
            .validate(0)
            .and_then(|user| forms::passwords(user, password.get(), password2.get()));
        match created {
            Ok(created) => {
                invalid.set(None);
                fields.set(UserFields::default());
                password.set(String::new());
                password2.set(String::new());
                callbacks.send(Action::CreateUserRequest(created));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };

    cx.render(rsx!(
        div {
            BackLink {
                title: loc!(USERS_TITLE).to_string(),
                onclick: move |_| callbacks.navigate_to(Route::AdminUsers)
            }
            PageHeader { title: loc!("Legg til ny bruker").to_string() }
            div { class: "container",
                UserForm { fields: fields }
                PasswordFields { password: password, password2: password2 }
                button { class: "btn btn-primary", onclick: move |_| create(), loc!("Lag bruker") }
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
pub fn AdminUsersPassword<'a>(cx: Scope<'a>, view_store: &'a ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let props = UsersProps::from_state(view_store);
    let user_id = use_state(cx, || None::<i32>);
    let password = use_state(cx, String::new);
    let password2 = use_state(cx, String::new);
    let invalid = use_state(cx, || None::<&'static str>);

    let change = move || {
        let Some(user) = find_user(view_store, *user_id.get()) else {
            invalid.set(Some(loc!("Velg en bruker")));
            return;
        };
        match forms::passwords(user, password.get(), password2.get()) {
            Ok(passwords) => {
                invalid.set(None);
                password.set(String::new());
                password2.set(String::new());
                callbacks.send(Action::ChangePasswordRequest(passwords));
            }
            Err(reason) => invalid.set(Some(reason)),
        }
    };

    cx.render(rsx!(
        div {
            BackLink {
                title: loc!(USERS_TITLE).to_string(),
                onclick: move |_| callbacks.navigate_to(Route::AdminUsers)
            }
            PageHeader { title: loc!("Endre passord").to_string() }
            div { class: "container",
                Choice {
                    label: loc!("Velg bruker"),
                    options: props.users,
                    selected: user_id.get().unwrap_or_default(),
                    onselect: move |id| user_id.set(id)
                }
                PasswordFields { password: password, password2: password2 }
                button { class: "btn btn-primary", onclick: move |_| change(), loc!("Endre passord") }
                invalid.get().map(|reason| rsx!(ErrorBox {
                    content: reason.to_string(),
                    ondismiss: move |_| invalid.set(None)
                }))
            }
            LogoutButton { onclick: move |_| callbacks.on_logout() }
        }
    ))
}
