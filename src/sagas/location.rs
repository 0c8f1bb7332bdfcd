use super::SagaContext;
use crate::routes::{Location, Route};
use crate::session::user_is_not_logged_in;
use crate::store::{Action, AppState};

/// Fetch what the newly shown screen needs
pub async fn location_saga(mut context: SagaContext) {
    while let Some(url) = context
        .take(|action| match action {
            Action::Navigate(url) => Some(url.clone()),
            _ => None,
        })
        .await
    {
        let route = Location::new(&url).route();
        let requests = context.select(|state| requests_for(route, state));
        log::debug!("location: {route:?} needs {} requests", requests.len());
        for request in requests {
            context.put(request);
        }
    }
}

/// The data requests a screen needs when it is shown with the given state.
/// Nothing is requested for a user that isn't logged in.
pub fn requests_for(route: Route, state: &AppState) -> Vec<Action> {
    if user_is_not_logged_in(state) {
        return Vec::new();
    }

    let account_id = state.account.account_id;
    let history_owner = match state.account.username.as_str() {
        "" => state.username().to_string(),
        username => username.to_string(),
    };
    let with_account = |request: fn(i32) -> Action| {
        // A zero id means no account has been fetched or picked yet
        (account_id > 0).then(|| request(account_id))
    };

    match route {
        Route::Home | Route::Login => Vec::new(),
        Route::User => vec![
            Action::AccountRequest(state.username().to_string()),
            Action::JobtypeListRequest,
        ],
        Route::PerformedJobs | Route::AdminJobsDelete => {
            with_account(Action::RecentJobsRequest).into_iter().collect()
        }
        Route::AdminJobsEdit => with_account(Action::RecentJobsRequest)
            .into_iter()
            .chain([Action::JobtypeListRequest])
            .collect(),
        Route::PerformedPayments => with_account(Action::RecentPaymentsRequest)
            .into_iter()
            .collect(),
        Route::Statistics => vec![
            Action::EarningsSumOverYearRequest(history_owner.clone()),
            Action::EarningsSumOverMonthRequest(history_owner),
        ],
        Route::Admin => vec![Action::AccountsRequest, Action::PaymenttypesRequest],
        Route::AdminJobtypes | Route::AdminJobtypesModify | Route::AdminJobtypesCreate => {
            vec![Action::JobtypeListRequest]
        }
        Route::AdminPaymenttypes
        | Route::AdminPaymenttypesModify
        | Route::AdminPaymenttypesCreate => vec![Action::PaymenttypesRequest],
        Route::AdminUsers
        | Route::AdminUsersModify
        | Route::AdminUsersCreate
        | Route::AdminUsersPassword => vec![Action::UsersRequest],
    }
}
