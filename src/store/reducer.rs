use std::sync::Arc;

use navicula::effect::Effect;

use super::{Action, AppState};
use crate::environment::Environment;
use crate::routes::Location;
use crate::sagas::{Dispatch, RootSaga, SagaSettings};

/// The navicula side of the store: apply the action, then hand it to the sagas
pub fn reduce<'a>(
    context: &'a impl navicula::types::MessageContext<Action, Action, ()>,
    action: Action,
    state: &'a mut AppState,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    if matches!(action, Action::Startup) {
        let updater = context.updater().clone();
        let dispatch: Dispatch = Arc::new(move |action| updater(action));
        let root_saga = RootSaga::new(
            environment.api(),
            &environment.bus,
            dispatch,
            SagaSettings::from(&environment.config),
        );
        return Effect::merge2(
            Effect::fire_forget(async move { root_saga.join().await }),
            Effect::action(Action::InitialLoginStateRequest),
        );
    }

    apply(state, &action);
    environment.bus.publish(action, state);
    Effect::NONE
}

/// Compute the next state. Requests leave the state alone, the sagas pick them up.
pub fn apply(state: &mut AppState, action: &Action) {
    match action {
        Action::InitialLoginStateReceived(result) => {
            state.have_received_response_from_login = true;
            match result {
                Ok(response) => state.login_response = response.clone(),
                Err(e) => {
                    state.login_response = Default::default();
                    state.error = Some(e.clone());
                }
            }
        }
        Action::LoginReceived(result) => {
            state.have_received_response_from_login = true;
            match result {
                Ok(response) => {
                    state.login_response = response.clone();
                    state.error = (response.roles.is_empty() && !response.error_message.is_empty())
                        .then(|| response.error_message.clone());
                }
                Err(e) => {
                    state.login_response = Default::default();
                    state.error = Some(e.clone());
                }
            }
        }
        Action::LogoutReceived(result) => match result {
            Ok(response) => {
                let location = std::mem::take(&mut state.location);
                *state = AppState {
                    have_received_response_from_login: true,
                    login_response: response.clone(),
                    location,
                    ..Default::default()
                };
            }
            Err(e) => state.error = Some(e.clone()),
        },
        Action::Navigate(url) => {
            state.location = Location::new(url);
        }
        Action::AccountReceived(result) | Action::RegisterJobReceived(result) => {
            if let Some(account) = ok_or_error(state, result) {
                state.account = account;
            }
        }
        Action::RegisterPaymentReceived(result) => {
            if let Some(account) = ok_or_error(state, result) {
                if let Some(listed) = state
                    .accounts
                    .iter_mut()
                    .find(|listed| listed.account_id == account.account_id)
                {
                    *listed = account.clone();
                }
                state.account = account;
            }
        }
        Action::AccountsReceived(result) => {
            if let Some(accounts) = ok_or_error(state, result) {
                state.accounts = accounts.into();
            }
        }
        Action::SelectAccount(account) => {
            state.account = account.clone();
            state.jobs.clear();
            state.payments.clear();
        }
        Action::JobtypeListReceived(result)
        | Action::CreateJobtypeReceived(result)
        | Action::ModifyJobtypeReceived(result) => {
            if let Some(jobtypes) = ok_or_error(state, result) {
                state.jobtypes = jobtypes.into();
            }
        }
        Action::RecentJobsReceived(result)
        | Action::DeleteJobsReceived(result)
        | Action::UpdateJobReceived(result) => {
            if let Some(jobs) = ok_or_error(state, result) {
                state.jobs = jobs.into();
            }
        }
        Action::PaymenttypesReceived(result)
        | Action::CreatePaymenttypeReceived(result)
        | Action::ModifyPaymenttypeReceived(result) => {
            if let Some(paymenttypes) = ok_or_error(state, result) {
                state.paymenttypes = paymenttypes.into();
            }
        }
        Action::RecentPaymentsReceived(result) => {
            if let Some(payments) = ok_or_error(state, result) {
                state.payments = payments.into();
            }
        }
        Action::UsersReceived(result)
        | Action::CreateUserReceived(result)
        | Action::ModifyUserReceived(result)
        | Action::ChangePasswordReceived(result) => {
            if let Some(users) = ok_or_error(state, result) {
                state.users = users.into();
            }
        }
        Action::NotificationReceived(notification) => {
            state.notification = Some(notification.clone());
        }
        Action::ClearNotification => state.notification = None,
        Action::EarningsSumOverYearReceived(result) => {
            if let Some(sums) = ok_or_error(state, result) {
                state.earnings_sum_over_year = sums.into();
            }
        }
        Action::EarningsSumOverMonthReceived(result) => {
            if let Some(sums) = ok_or_error(state, result) {
                state.earnings_sum_over_month = sums.into();
            }
        }
        Action::ClearError => state.error = None,
        Action::Startup
        | Action::InitialLoginStateRequest
        | Action::LoginRequest(_)
        | Action::LogoutRequest
        | Action::AccountRequest(_)
        | Action::AccountsRequest
        | Action::JobtypeListRequest
        | Action::CreateJobtypeRequest(_)
        | Action::ModifyJobtypeRequest(_)
        | Action::RegisterJobRequest(_)
        | Action::RecentJobsRequest(_)
        | Action::DeleteJobsRequest(_)
        | Action::UpdateJobRequest(_)
        | Action::PaymenttypesRequest
        | Action::CreatePaymenttypeRequest(_)
        | Action::ModifyPaymenttypeRequest(_)
        | Action::RegisterPaymentRequest(_)
        | Action::RecentPaymentsRequest(_)
        | Action::UsersRequest
        | Action::CreateUserRequest(_)
        | Action::ModifyUserRequest(_)
        | Action::ChangePasswordRequest(_)
        | Action::StartNotificationListening(_)
        | Action::EarningsSumOverYearRequest(_)
        | Action::EarningsSumOverMonthRequest(_) => (),
    }
}

fn ok_or_error<T: Clone>(state: &mut AppState, result: &Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value.clone()),
        Err(e) => {
            state.error = Some(e.clone());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::*;
    use crate::routes::Route;

    fn logged_in(username: &str, roles: &[&str]) -> LoginResult {
        LoginResult {
            username: username.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            error_message: String::new(),
        }
    }

    fn account(id: AccountId, balance: f64) -> Account {
        Account {
            account_id: id,
            username: format!("user{id}"),
            first_name: "Jane".to_string(),
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn login_response_marks_the_session() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::LoginReceived(Ok(logged_in("jad", &["ukelonnuser"]))),
        );
        assert!(state.have_received_response_from_login);
        assert_eq!(state.username(), "jad");
        assert_eq!(state.error, None);
    }

    #[test]
    fn rejected_login_shows_the_backend_message() {
        let mut state = AppState::default();
        let response = LoginResult {
            username: "jad".to_string(),
            roles: vec![],
            error_message: "Feil passord".to_string(),
        };
        apply(&mut state, &Action::LoginReceived(Ok(response)));
        assert!(state.have_received_response_from_login);
        assert_eq!(state.error.as_deref(), Some("Feil passord"));
    }

    #[test]
    fn failing_initial_login_state_still_counts_as_a_response() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::InitialLoginStateReceived(Err("API Error: login_state".to_string())),
        );
        assert!(state.have_received_response_from_login);
        assert!(state.login_response.roles.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn logout_clears_everything_but_the_location() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::LoginReceived(Ok(logged_in("jad", &["ukelonnuser"]))),
        );
        apply(&mut state, &Action::AccountReceived(Ok(account(1, 125.0))));
        apply(&mut state, &Action::Navigate(Route::User.path().to_string()));

        apply(&mut state, &Action::LogoutReceived(Ok(LoginResult::default())));
        assert!(state.have_received_response_from_login);
        assert!(state.login_response.roles.is_empty());
        assert_eq!(state.account, Account::default());
        assert_eq!(state.location.route(), Route::User);
    }

    #[test]
    fn navigation_parses_the_query_string() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::Navigate("/ukelonn/performedpayments?parentTitle=Tilbake".to_string()),
        );
        assert_eq!(state.location.route(), Route::PerformedPayments);
        assert_eq!(state.location.parent_title(), "Tilbake");
    }

    #[test]
    fn registered_payment_updates_the_account_list() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::AccountsReceived(Ok(vec![account(1, 100.0), account(2, 50.0)])),
        );
        apply(&mut state, &Action::SelectAccount(account(2, 50.0)));
        apply(
            &mut state,
            &Action::RegisterPaymentReceived(Ok(account(2, 0.0))),
        );
        assert_eq!(state.account.balance, 0.0);
        assert_eq!(state.accounts[1].balance, 0.0);
        assert_eq!(state.accounts[0].balance, 100.0);
    }

    #[test]
    fn failures_keep_the_previous_data() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::PaymenttypesReceived(Ok(vec![TransactionType {
                id: 4,
                transaction_type_name: "Inn på konto".to_string(),
                ..Default::default()
            }])),
        );
        apply(
            &mut state,
            &Action::CreatePaymenttypeReceived(Err("API Error: create_paymenttype".to_string())),
        );
        assert_eq!(state.paymenttypes.len(), 1);
        assert_eq!(
            state.error.as_deref(),
            Some("API Error: create_paymenttype")
        );

        apply(&mut state, &Action::ClearError);
        assert_eq!(state.error, None);
    }

    #[test]
    fn requests_do_not_touch_the_state() {
        let mut state = AppState::default();
        let before = state.clone();
        apply(&mut state, &Action::LogoutRequest);
        apply(&mut state, &Action::JobtypeListRequest);
        apply(&mut state, &Action::RecentJobsRequest(3));
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_an_account_drops_the_old_history() {
        let mut state = AppState::default();
        apply(
            &mut state,
            &Action::RecentJobsReceived(Ok(vec![Transaction {
                id: 7,
                transaction_type: None,
                transaction_time: chrono::Utc::now(),
                transaction_amount: 45.0,
                paid_out: false,
                name: "Støvsuging".to_string(),
            }])),
        );
        apply(&mut state, &Action::SelectAccount(account(5, 0.0)));
        assert!(state.jobs.is_empty());
        assert_eq!(state.account.account_id, 5);
    }

    #[test]
    fn notifications_can_be_dismissed() {
        let mut state = AppState::default();
        let notification = Notification {
            title: "Ukelønn".to_string(),
            message: "Jane har utført Gressklipping".to_string(),
        };
        apply(&mut state, &Action::NotificationReceived(notification.clone()));
        assert_eq!(state.notification, Some(notification));
        apply(&mut state, &Action::ClearNotification);
        assert_eq!(state.notification, None);
    }
}
