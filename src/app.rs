#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

use crate::components::{
    admin, admin_jobs, admin_types, admin_users, login, performed, route_screen, statistics, user,
    Callbacks, Screen,
};
use crate::environment::{Environment, Repository};
use crate::loc;
use crate::routes::Route;
use crate::session::home_route;
use crate::store::{AppState, ViewStore};
use crate::style::STYLE;
use crate::widgets::*;

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let window = WindowBuilder::new()
        .with_title(loc!("Ukelønn"))
        .with_inner_size(LogicalSize::new(800., 900.));
    let config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>Ukelønn</title>
        <style>{STYLE}</style>
        "#
        ))
        .with_window(window);

    dioxus_desktop::launch_with_props(RootApp, RootAppProps {}, config);
}

pub struct RootAppProps {}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let environment = use_state(cx, || Repository::new().and_then(Environment::new));

    match environment.get() {
        Ok(environment) => cx.render(rsx!(Connected { environment: environment })),
        Err(e) => {
            log::error!("Could not set up the environment: {e}");
            cx.render(rsx!(ErrorPage { content: e }))
        }
    }
}

#[inline_props]
fn Connected<'a>(cx: Scope<'a>, environment: &'a Environment) -> Element<'a> {
    let view_store: ViewStore = navicula::root(cx, &[], environment, AppState::default);
    cx.render(rsx!(Router { view_store: view_store }))
}

#[inline_props]
fn Router<'a>(cx: Scope<'a>, view_store: ViewStore<'a>) -> Element<'a> {
    let callbacks = Callbacks::for_store(cx, view_store);
    let screen = route_screen(view_store);
    log::trace!("rerender router {screen:?}");

    let notification = view_store.notification.clone();
    // The login screen shows its own errors
    let error = view_store
        .error
        .clone()
        .filter(|_| screen != Screen::Show(Route::Login));

    let body = match screen {
        Screen::Redirect(to) => rsx!(Redirect {
            to: to,
            onredirect: move |route: Route| callbacks.navigate_to(route)
        }),
        Screen::Show(Route::Login) => rsx!(login::Login { view_store: view_store }),
        Screen::Show(Route::Home) => rsx!(Redirect {
            to: home_route(view_store),
            onredirect: move |route: Route| callbacks.navigate_to(route)
        }),
        Screen::Show(Route::User) => rsx!(user::User { view_store: view_store }),
        Screen::Show(Route::PerformedJobs) => {
            rsx!(performed::PerformedJobs { view_store: view_store })
        }
        Screen::Show(Route::PerformedPayments) => {
            rsx!(performed::PerformedPayments { view_store: view_store })
        }
        Screen::Show(Route::Statistics) => rsx!(statistics::Statistics { view_store: view_store }),
        Screen::Show(Route::Admin) => rsx!(admin::Admin { view_store: view_store }),
        Screen::Show(Route::AdminJobtypes) => {
            rsx!(admin_types::AdminJobtypes { view_store: view_store })
        }
        Screen::Show(Route::AdminJobtypesModify) => {
            rsx!(admin_types::AdminJobtypesModify { view_store: view_store })
        }
        Screen::Show(Route::AdminJobtypesCreate) => {
            rsx!(admin_types::AdminJobtypesCreate { view_store: view_store })
        }
        Screen::Show(Route::AdminJobsDelete) => {
            rsx!(admin_jobs::AdminJobsDelete { view_store: view_store })
        }
        Screen::Show(Route::AdminJobsEdit) => {
            rsx!(admin_jobs::AdminJobsEdit { view_store: view_store })
        }
        Screen::Show(Route::AdminPaymenttypes) => {
            rsx!(admin_types::AdminPaymenttypes { view_store: view_store })
        }
        Screen::Show(Route::AdminPaymenttypesModify) => {
            rsx!(admin_types::AdminPaymenttypesModify { view_store: view_store })
        }
        Screen::Show(Route::AdminPaymenttypesCreate) => {
            rsx!(admin_types::AdminPaymenttypesCreate { view_store: view_store })
        }
        Screen::Show(Route::AdminUsers) => rsx!(admin_users::AdminUsers { view_store: view_store }),
        Screen::Show(Route::AdminUsersModify) => {
            rsx!(admin_users::AdminUsersModify { view_store: view_store })
        }
        Screen::Show(Route::AdminUsersCreate) => {
            rsx!(admin_users::AdminUsersCreate { view_store: view_store })
        }
        Screen::Show(Route::AdminUsersPassword) => {
            rsx!(admin_users::AdminUsersPassword { view_store: view_store })
        }
    };

    cx.render(rsx!(
        div { class: "app",
            notification.map(|notification| rsx!(NotificationBox {
                notification: notification,
                ondismiss: move |_| callbacks.dismiss_notification()
            })),
            { body },
            error.map(|error| rsx!(ErrorBox {
                content: error,
                ondismiss: move |_| callbacks.dismiss_error()
            }))
        }
    ))
}
