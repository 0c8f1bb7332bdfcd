use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn account_saga(context: SagaContext) {
    take_every(
        context,
        "account",
        |action| match action {
            Action::AccountRequest(username) => Some(username.clone()),
            _ => None,
        },
        |api, username| async move { api.account(username).await },
        Action::AccountReceived,
    )
    .await
}

pub async fn request_accounts_saga(context: SagaContext) {
    take_every(
        context,
        "accounts",
        |action| matches!(action, Action::AccountsRequest).then_some(()),
        |api, ()| async move { api.accounts().await },
        Action::AccountsReceived,
    )
    .await
}
