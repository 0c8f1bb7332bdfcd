use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn request_paymenttypes_saga(context: SagaContext) {
    take_every(
        context,
        "paymenttypes",
        |action| matches!(action, Action::PaymenttypesRequest).then_some(()),
        |api, ()| async move { api.paymenttypes().await },
        Action::PaymenttypesReceived,
    )
    .await
}

pub async fn request_create_paymenttype_saga(context: SagaContext) {
    take_every(
        context,
        "create_paymenttype",
        |action| match action {
            Action::CreatePaymenttypeRequest(paymenttype) => Some(paymenttype.clone()),
            _ => None,
        },
        |api, paymenttype| async move { api.create_paymenttype(paymenttype).await },
        Action::CreatePaymenttypeReceived,
    )
    .await
}

pub async fn request_modify_paymenttype_saga(context: SagaContext) {
    take_every(
        context,
        "modify_paymenttype",
        |action| match action {
            Action::ModifyPaymenttypeRequest(paymenttype) => Some(paymenttype.clone()),
            _ => None,
        },
        |api, paymenttype| async move { api.modify_paymenttype(paymenttype).await },
        Action::ModifyPaymenttypeReceived,
    )
    .await
}
