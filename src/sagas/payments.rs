use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn request_register_payment_saga(context: SagaContext) {
    take_every(
        context,
        "register_payment",
        |action| match action {
            Action::RegisterPaymentRequest(payment) => Some(payment.clone()),
            _ => None,
        },
        |api, payment| async move { api.register_payment(payment).await },
        Action::RegisterPaymentReceived,
    )
    .await
}

pub async fn request_recent_payments_saga(context: SagaContext) {
    take_every(
        context,
        "recent_payments",
        |action| match action {
            Action::RecentPaymentsRequest(account_id) => Some(*account_id),
            _ => None,
        },
        |api, account_id| async move { api.recent_payments(account_id).await },
        Action::RecentPaymentsReceived,
    )
    .await
}
