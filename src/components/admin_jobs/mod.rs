mod view;

pub use view::{AdminJobsDelete, AdminJobsEdit};

use crate::components::admin::account_label;
use crate::components::transaction_type_options;
use crate::environment::types::{Account, AccountWithJobIds, Transaction};
use crate::helper::{format_amount, format_date};
use crate::store::AppState;
use crate::widgets::TransactionRow;

#[derive(Debug, Clone, PartialEq)]
pub struct JobsAdminProps {
    pub account: Account,
    pub accounts: Vec<(i32, String)>,
    pub jobs: Vec<TransactionRow>,
    pub jobtypes: Vec<(i32, String)>,
}

impl JobsAdminProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            account: state.account.clone(),
            accounts: state
                .accounts
                .iter()
                .map(|account| (account.account_id, account_label(account)))
                .collect(),
            jobs: state.jobs.iter().map(TransactionRow::from).collect(),
            jobtypes: transaction_type_options(&state.jobtypes),
        }
    }
}

/// The jobs to delete, `None` when nothing is ticked
pub fn jobs_to_delete(
    account: &Account,
    ticked: impl IntoIterator<Item = i32>,
) -> Option<AccountWithJobIds> {
    let job_ids: Vec<i32> = ticked.into_iter().collect();
    (!job_ids.is_empty()).then(|| AccountWithJobIds {
        account: account.clone(),
        job_ids,
    })
}

/// What the edit form starts out with for a picked job
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFields {
    pub jobtype: Option<i32>,
    pub amount: String,
    pub date: String,
}

impl From<&Transaction> for JobFields {
    fn from(job: &Transaction) -> Self {
        Self {
            jobtype: job.transaction_type.as_ref().map(|kind| kind.id),
            amount: format_amount(job.transaction_amount),
            date: format_date(&job.transaction_time),
        }
    }
}

pub fn find_job(state: &AppState, id: Option<i32>) -> Option<Transaction> {
    let id = id?;
    state.jobs.iter().find(|job| job.id == id).cloned()
}
