use super::SagaContext;
use crate::environment::types::LoginResult;
use crate::routes::Route;
use crate::store::Action;

pub async fn request_initial_login_state_saga(mut context: SagaContext) {
    while let Some(()) = context
        .take(|action| matches!(action, Action::InitialLoginStateRequest).then_some(()))
        .await
    {
        log::debug!("initial_login_state: triggered");
        let result = context.api().login_state().await;
        let listen_for = logged_in_username(&result);
        context.put(Action::InitialLoginStateReceived(result));
        if let Some(username) = listen_for {
            context.put(Action::StartNotificationListening(username));
        }
    }
}

pub async fn request_login_saga(mut context: SagaContext) {
    while let Some(credentials) = context
        .take(|action| match action {
            Action::LoginRequest(credentials) => Some(credentials.clone()),
            _ => None,
        })
        .await
    {
        log::debug!("login: triggered for {}", credentials.username);
        let result = context.api().login(credentials).await;
        let listen_for = logged_in_username(&result);
        context.put(Action::LoginReceived(result));
        if let Some(username) = listen_for {
            context.put(Action::StartNotificationListening(username));
        }
    }
}

pub async fn request_logout_saga(mut context: SagaContext) {
    while let Some(()) = context
        .take(|action| matches!(action, Action::LogoutRequest).then_some(()))
        .await
    {
        log::debug!("logout: triggered");
        let result = context.api().logout().await;
        let logged_out = result.is_ok();
        context.put(Action::LogoutReceived(result));
        if logged_out {
            context.put(Action::Navigate(Route::Login.path().to_string()));
        }
    }
}

/// A response only counts as logged in when it carries roles
fn logged_in_username(result: &Result<LoginResult, String>) -> Option<String> {
    match result {
        Ok(response) if !response.roles.is_empty() => Some(response.username.clone()),
        _ => None,
    }
}
