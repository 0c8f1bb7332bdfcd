use async_trait::async_trait;

use super::types::*;

/// The calls the sagas make against the ukelonn backend.
///
/// `Model` is the HTTP implementation; the saga tests swap in an in-memory one.
#[async_trait]
pub trait UkelonnApi: Send + Sync {
    /// Asks the backend whether the session cookie belongs to a logged in user
    async fn login_state(&self) -> Result<LoginResult, String>;
    async fn login(&self, credentials: LoginCredentials) -> Result<LoginResult, String>;
    async fn logout(&self) -> Result<LoginResult, String>;

    async fn account(&self, username: String) -> Result<Account, String>;
    async fn accounts(&self) -> Result<Vec<Account>, String>;

    async fn jobtypes(&self) -> Result<Vec<TransactionType>, String>;
    async fn create_jobtype(&self, jobtype: TransactionType)
        -> Result<Vec<TransactionType>, String>;
    async fn modify_jobtype(&self, jobtype: TransactionType)
        -> Result<Vec<TransactionType>, String>;

    async fn register_job(&self, job: PerformedTransaction) -> Result<Account, String>;
    async fn recent_jobs(&self, account_id: AccountId) -> Result<Vec<Transaction>, String>;
    async fn delete_jobs(&self, jobs: AccountWithJobIds) -> Result<Vec<Transaction>, String>;
    async fn update_job(&self, job: UpdatedTransaction) -> Result<Vec<Transaction>, String>;

    async fn paymenttypes(&self) -> Result<Vec<TransactionType>, String>;
    async fn create_paymenttype(
        &self,
        paymenttype: TransactionType,
    ) -> Result<Vec<TransactionType>, String>;
    async fn modify_paymenttype(
        &self,
        paymenttype: TransactionType,
    ) -> Result<Vec<TransactionType>, String>;

    async fn register_payment(&self, payment: PerformedTransaction) -> Result<Account, String>;
    async fn recent_payments(&self, account_id: AccountId) -> Result<Vec<Transaction>, String>;

    async fn users(&self) -> Result<Vec<User>, String>;
    async fn create_user(&self, user: PasswordsWithUser) -> Result<Vec<User>, String>;
    async fn modify_user(&self, user: User) -> Result<Vec<User>, String>;
    async fn change_password(&self, passwords: PasswordsWithUser) -> Result<Vec<User>, String>;

    /// Long-polls the notifications queued for `username`
    async fn notifications_to(&self, username: String) -> Result<Vec<Notification>, String>;

    async fn earnings_sum_over_year(&self, username: String) -> Result<Vec<SumYear>, String>;
    async fn earnings_sum_over_month(&self, username: String)
        -> Result<Vec<SumYearMonth>, String>;
}
