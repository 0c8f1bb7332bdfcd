//! The asynchronous workflows. Every saga is a tokio task that waits for
//! its trigger actions on the bus, talks to the backend, and dispatches the
//! outcome back into the store.

mod account;
mod jobs;
mod jobtypes;
mod location;
mod login;
mod notification;
mod payments;
mod paymenttypes;
mod statistics;
mod users;

#[cfg(test)]
mod mock;

pub use location::requests_for;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::environment::types::ClientConfig;
use crate::environment::UkelonnApi;
use crate::store::{Action, AppState, Bus};

/// How sagas hand actions back to the store
pub type Dispatch = Arc<dyn Fn(Action) + Send + Sync>;

type Routine = Pin<Box<dyn Future<Output = ()> + Send>>;

#[derive(Debug, Clone, Copy)]
pub struct SagaSettings {
    pub notification_interval: Duration,
}

/// Shortest pause between two notification polls
const MIN_NOTIFICATION_INTERVAL_SECS: u64 = 1;

impl From<&ClientConfig> for SagaSettings {
    fn from(config: &ClientConfig) -> Self {
        let secs = config
            .notification_interval_secs
            .max(MIN_NOTIFICATION_INTERVAL_SECS);
        Self {
            notification_interval: Duration::from_secs(secs),
        }
    }
}

pub struct SagaContext {
    api: Arc<dyn UkelonnApi>,
    actions: broadcast::Receiver<Action>,
    state: watch::Receiver<AppState>,
    dispatch: Dispatch,
    settings: SagaSettings,
}

impl SagaContext {
    /// Wait for the next action `pattern` matches. `None` once the bus is gone.
    pub async fn take<T>(&mut self, pattern: impl Fn(&Action) -> Option<T>) -> Option<T> {
        loop {
            match self.actions.recv().await {
                Ok(action) => {
                    if let Some(matched) = pattern(&action) {
                        return Some(matched);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Saga fell behind, skipped {skipped} actions")
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Read from the state the store last published
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state.borrow())
    }

    pub fn put(&self, action: Action) {
        (self.dispatch)(action)
    }

    pub fn api(&self) -> Arc<dyn UkelonnApi> {
        self.api.clone()
    }
}

/// Run one backend call per matching action, each in its own task, and
/// dispatch `received` with the outcome.
pub async fn take_every<T, R, Fut>(
    mut context: SagaContext,
    name: &'static str,
    pattern: impl Fn(&Action) -> Option<T>,
    call: impl Fn(Arc<dyn UkelonnApi>, T) -> Fut,
    received: fn(Result<R, String>) -> Action,
) where
    Fut: Future<Output = Result<R, String>> + Send + 'static,
    R: Send + 'static,
{
    while let Some(payload) = context.take(&pattern).await {
        log::debug!("{name}: triggered");
        let request = call(context.api(), payload);
        let dispatch = context.dispatch.clone();
        tokio::spawn(async move {
            let result = request.await;
            if let Err(e) = &result {
                log::warn!("{name}: {e}");
            }
            dispatch(received(result));
        });
    }
}

/// All sagas, subscribed to the bus but not yet running
pub struct RootSaga {
    routines: Vec<(&'static str, Routine)>,
}

impl RootSaga {
    /// Subscribes every saga right away, so nothing published after this
    /// call is missed even if the tasks start later.
    pub fn new(
        api: Arc<dyn UkelonnApi>,
        bus: &Bus,
        dispatch: Dispatch,
        settings: SagaSettings,
    ) -> Self {
        let context = || {
            let (actions, state) = bus.subscribe();
            SagaContext {
                api: api.clone(),
                actions,
                state,
                dispatch: dispatch.clone(),
                settings,
            }
        };

        let routines: Vec<(&'static str, Routine)> = vec![
            (
                "initial_login_state",
                Box::pin(login::request_initial_login_state_saga(context())),
            ),
            ("login", Box::pin(login::request_login_saga(context()))),
            ("logout", Box::pin(login::request_logout_saga(context()))),
            ("location", Box::pin(location::location_saga(context()))),
            ("account", Box::pin(account::account_saga(context()))),
            ("jobtype_list", Box::pin(jobtypes::request_jobtype_list_saga(context()))),
            ("register_job", Box::pin(jobs::request_register_job_saga(context()))),
            ("recent_jobs", Box::pin(jobs::request_recent_jobs_saga(context()))),
            (
                "recent_payments",
                Box::pin(payments::request_recent_payments_saga(context())),
            ),
            ("accounts", Box::pin(account::request_accounts_saga(context()))),
            (
                "paymenttypes",
                Box::pin(paymenttypes::request_paymenttypes_saga(context())),
            ),
            (
                "register_payment",
                Box::pin(payments::request_register_payment_saga(context())),
            ),
            (
                "modify_jobtype",
                Box::pin(jobtypes::request_modify_jobtype_saga(context())),
            ),
            (
                "create_jobtype",
                Box::pin(jobtypes::request_create_jobtype_saga(context())),
            ),
            ("delete_jobs", Box::pin(jobs::request_delete_jobs_saga(context()))),
            ("update_job", Box::pin(jobs::request_update_job_saga(context()))),
            (
                "modify_paymenttype",
                Box::pin(paymenttypes::request_modify_paymenttype_saga(context())),
            ),
            (
                "create_paymenttype",
                Box::pin(paymenttypes::request_create_paymenttype_saga(context())),
            ),
            ("users", Box::pin(users::request_users_saga(context()))),
            ("modify_user", Box::pin(users::request_modify_user_saga(context()))),
            ("create_user", Box::pin(users::request_create_user_saga(context()))),
            (
                "change_password",
                Box::pin(users::request_change_password_saga(context())),
            ),
            (
                "notification",
                Box::pin(notification::start_notification_listening(context())),
            ),
            (
                "earnings_sum_over_year",
                Box::pin(statistics::earnings_sum_over_year_saga(context())),
            ),
            (
                "earnings_sum_over_month",
                Box::pin(statistics::earnings_sum_over_month_saga(context())),
            ),
        ];

        Self { routines }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.routines.iter().map(|(name, _)| *name).collect()
    }

    /// Start every saga as its own task. Must run inside a tokio runtime.
    pub fn fork(self) -> Vec<(&'static str, JoinHandle<()>)> {
        log::debug!("Forking {} sagas", self.routines.len());
        self.routines
            .into_iter()
            .map(|(name, routine)| (name, tokio::spawn(routine)))
            .collect()
    }

    /// Fork and wait for the sagas. A saga that panics is logged, the others keep running.
    pub async fn join(self) {
        let (names, handles): (Vec<_>, Vec<_>) = self.fork().into_iter().unzip();
        for (name, result) in names.into_iter().zip(join_all(handles).await) {
            if let Err(e) = result {
                log::error!("Saga {name} stopped: {e:?}");
            }
        }
    }
}
