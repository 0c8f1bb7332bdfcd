//! The screens. Each screen module projects the store state into its props
//! (`from_state`) and renders them; every interaction goes out through
//! [`Callbacks`].

pub mod admin;
pub mod admin_jobs;
pub mod admin_types;
pub mod admin_users;
pub mod forms;
pub mod login;
pub mod performed;
pub mod statistics;
pub mod user;

use dioxus::prelude::ScopeState;

use crate::environment::types::*;
use crate::routes::Route;
use crate::session::{home_route, user_is_not_logged_in};
use crate::store::{Action, AppState, ViewStore};

/// The dispatch side of a connected screen
#[derive(Clone, Copy)]
pub struct Callbacks<'a> {
    dispatch: &'a dyn Fn(Action),
}

impl<'a> Callbacks<'a> {
    pub fn new(dispatch: &'a dyn Fn(Action)) -> Self {
        Self { dispatch }
    }

    /// Bind to the root view store for the lifetime of the scope
    pub fn for_store(cx: &'a ScopeState, view_store: &'a ViewStore<'a>) -> Self {
        let dispatch = cx.bump().alloc(move |action: Action| view_store.send(action));
        Self::new(dispatch)
    }

    pub fn send(&self, action: Action) {
        (self.dispatch)(action)
    }

    pub fn on_logout(&self) {
        self.send(Action::LogoutRequest)
    }

    pub fn on_login(&self, username: String, password: String) {
        self.send(Action::LoginRequest(LoginCredentials { username, password }))
    }

    pub fn navigate(&self, url: impl Into<String>) {
        self.send(Action::Navigate(url.into()))
    }

    pub fn navigate_to(&self, route: Route) {
        self.navigate(route.path())
    }

    pub fn select_account(&self, account: Account) {
        self.send(Action::SelectAccount(account))
    }

    pub fn dismiss_error(&self) {
        self.send(Action::ClearError)
    }

    pub fn dismiss_notification(&self) {
        self.send(Action::ClearNotification)
    }
}

/// What the router shows for the current location
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Redirect(Route),
    Show(Route),
}

/// Protected routes go through the session guard before anything renders
pub fn route_screen(state: &AppState) -> Screen {
    let route = state.location.route();
    let not_logged_in = user_is_not_logged_in(state);
    match route {
        _ if route.is_protected() && not_logged_in => Screen::Redirect(Route::Login),
        Route::Login if !not_logged_in => Screen::Redirect(Route::Home),
        Route::Home => Screen::Redirect(home_route(state)),
        route => Screen::Show(route),
    }
}

/// Dropdown contents shared by the forms: `(id, label)`
pub fn transaction_type_options(types: &im::Vector<TransactionType>) -> Vec<(i32, String)> {
    types
        .iter()
        .map(|kind| (kind.id, kind.transaction_type_name.clone()))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::RefCell;

    pub fn logged_in(roles: &[&str]) -> AppState {
        AppState {
            have_received_response_from_login: true,
            login_response: LoginResult {
                username: "jad".to_string(),
                roles: roles.iter().map(|r| r.to_string()).collect(),
                error_message: String::new(),
            },
            ..Default::default()
        }
    }

    pub fn at(mut state: AppState, url: &str) -> AppState {
        state.location = crate::routes::Location::new(url);
        state
    }

    /// Run `f` with callbacks that record what they dispatch
    pub fn recording(f: impl FnOnce(Callbacks)) -> Vec<Action> {
        let sent = RefCell::new(Vec::new());
        let dispatch = |action: Action| sent.borrow_mut().push(action);
        f(Callbacks::new(&dispatch));
        sent.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn protected_routes_redirect_to_login_without_a_response() {
        for route in Route::iter().filter(Route::is_protected) {
            let state = at(AppState::default(), route.path());
            assert_eq!(route_screen(&state), Screen::Redirect(Route::Login), "{route:?}");
        }
    }

    #[test]
    fn protected_routes_redirect_when_the_response_has_no_roles() {
        for route in Route::iter().filter(Route::is_protected) {
            let state = at(logged_in(&[]), route.path());
            assert_eq!(route_screen(&state), Screen::Redirect(Route::Login), "{route:?}");
        }
    }

    #[test]
    fn protected_routes_render_after_login() {
        for route in Route::iter().filter(|r| r.is_protected() && *r != Route::Home) {
            let state = at(logged_in(&["ukelonnuser"]), route.path());
            assert_eq!(route_screen(&state), Screen::Show(route), "{route:?}");
        }
    }

    #[test]
    fn home_redirects_by_role() {
        let user = at(logged_in(&["ukelonnuser"]), "/ukelonn/");
        assert_eq!(route_screen(&user), Screen::Redirect(Route::User));
        let admin = at(logged_in(&["ukelonnadmin"]), "/ukelonn/");
        assert_eq!(route_screen(&admin), Screen::Redirect(Route::Admin));
    }

    #[test]
    fn login_screen_shows_until_logged_in() {
        let anonymous = at(AppState::default(), "/ukelonn/login");
        assert_eq!(route_screen(&anonymous), Screen::Show(Route::Login));
        let user = at(logged_in(&["ukelonnuser"]), "/ukelonn/login");
        assert_eq!(route_screen(&user), Screen::Redirect(Route::Home));
    }

    #[test]
    fn logout_dispatches_exactly_one_request() {
        let sent = recording(|callbacks| callbacks.on_logout());
        assert_eq!(sent, vec![Action::LogoutRequest]);
    }

    #[test]
    fn navigation_dispatches_the_path() {
        let sent = recording(|callbacks| {
            callbacks.navigate_to(Route::Statistics);
            callbacks.navigate(Route::PerformedJobs.with_parent_title("Tilbake"));
        });
        assert_eq!(
            sent,
            vec![
                Action::Navigate("/ukelonn/statistics".to_string()),
                Action::Navigate("/ukelonn/performedjobs?parentTitle=Tilbake".to_string()),
            ]
        );
    }
}
