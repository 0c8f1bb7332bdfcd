use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn request_users_saga(context: SagaContext) {
    take_every(
        context,
        "users",
        |action| matches!(action, Action::UsersRequest).then_some(()),
        |api, ()| async move { api.users().await },
        Action::UsersReceived,
    )
    .await
}

pub async fn request_create_user_saga(context: SagaContext) {
    take_every(
        context,
        "create_user",
        |action| match action {
            Action::CreateUserRequest(passwords) => Some(passwords.clone()),
            _ => None,
        },
        |api, passwords| async move { api.create_user(passwords).await },
        Action::CreateUserReceived,
    )
    .await
}

pub async fn request_modify_user_saga(context: SagaContext) {
    take_every(
        context,
        "modify_user",
        |action| match action {
            Action::ModifyUserRequest(user) => Some(user.clone()),
            _ => None,
        },
        |api, user| async move { api.modify_user(user).await },
        Action::ModifyUserReceived,
    )
    .await
}

pub async fn request_change_password_saga(context: SagaContext) {
    take_every(
        context,
        "change_password",
        |action| match action {
            Action::ChangePasswordRequest(passwords) => Some(passwords.clone()),
            _ => None,
        },
        |api, passwords| async move { api.change_password(passwords).await },
        Action::ChangePasswordReceived,
    )
    .await
}
