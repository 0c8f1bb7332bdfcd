use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn earnings_sum_over_year_saga(context: SagaContext) {
    take_every(
        context,
        "earnings_sum_over_year",
        |action| match action {
            Action::EarningsSumOverYearRequest(username) => Some(username.clone()),
            _ => None,
        },
        |api, username| async move { api.earnings_sum_over_year(username).await },
        Action::EarningsSumOverYearReceived,
    )
    .await
}

pub async fn earnings_sum_over_month_saga(context: SagaContext) {
    take_every(
        context,
        "earnings_sum_over_month",
        |action| match action {
            Action::EarningsSumOverMonthRequest(username) => Some(username.clone()),
            _ => None,
        },
        |api, username| async move { api.earnings_sum_over_month(username).await },
        Action::EarningsSumOverMonthReceived,
    )
    .await
}
