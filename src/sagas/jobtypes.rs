use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn request_jobtype_list_saga(context: SagaContext) {
    take_every(
        context,
        "jobtype_list",
        |action| matches!(action, Action::JobtypeListRequest).then_some(()),
        |api, ()| async move { api.jobtypes().await },
        Action::JobtypeListReceived,
    )
    .await
}

pub async fn request_create_jobtype_saga(context: SagaContext) {
    take_every(
        context,
        "create_jobtype",
        |action| match action {
            Action::CreateJobtypeRequest(jobtype) => Some(jobtype.clone()),
            _ => None,
        },
        |api, jobtype| async move { api.create_jobtype(jobtype).await },
        Action::CreateJobtypeReceived,
    )
    .await
}

pub async fn request_modify_jobtype_saga(context: SagaContext) {
    take_every(
        context,
        "modify_jobtype",
        |action| match action {
            Action::ModifyJobtypeRequest(jobtype) => Some(jobtype.clone()),
            _ => None,
        },
        |api, jobtype| async move { api.modify_jobtype(jobtype).await },
        Action::ModifyJobtypeReceived,
    )
    .await
}
