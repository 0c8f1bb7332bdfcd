use super::{take_every, SagaContext};
use crate::store::Action;

pub async fn request_register_job_saga(context: SagaContext) {
    take_every(
        context,
        "register_job",
        |action| match action {
            Action::RegisterJobRequest(job) => Some(job.clone()),
            _ => None,
        },
        |api, job| async move { api.register_job(job).await },
        Action::RegisterJobReceived,
    )
    .await
}

pub async fn request_recent_jobs_saga(context: SagaContext) {
    take_every(
        context,
        "recent_jobs",
        |action| match action {
            Action::RecentJobsRequest(account_id) => Some(*account_id),
            _ => None,
        },
        |api, account_id| async move { api.recent_jobs(account_id).await },
        Action::RecentJobsReceived,
    )
    .await
}

pub async fn request_delete_jobs_saga(context: SagaContext) {
    take_every(
        context,
        "delete_jobs",
        |action| match action {
            Action::DeleteJobsRequest(jobs) => Some(jobs.clone()),
            _ => None,
        },
        |api, jobs| async move { api.delete_jobs(jobs).await },
        Action::DeleteJobsReceived,
    )
    .await
}

pub async fn request_update_job_saga(context: SagaContext) {
    take_every(
        context,
        "update_job",
        |action| match action {
            Action::UpdateJobRequest(job) => Some(job.clone()),
            _ => None,
        },
        |api, job| async move { api.update_job(job).await },
        Action::UpdateJobReceived,
    )
    .await
}
