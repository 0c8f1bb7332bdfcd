use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::environment::types::*;
use crate::environment::UkelonnApi;

/// In-memory backend that records which calls were made
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<&'static str>>,
    polled: Mutex<Vec<String>>,
    failing: bool,
    anonymous: bool,
}

impl MockApi {
    /// Every call fails with `API Error: {call} offline`
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// The session check reports nobody logged in
    pub fn anonymous() -> Self {
        Self {
            anonymous: true,
            ..Default::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, call: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|made| **made == call)
            .count()
    }

    /// Usernames passed to `notifications_to`, oldest first
    pub fn polled_usernames(&self) -> Vec<String> {
        self.polled.lock().unwrap().clone()
    }

    fn respond<T>(&self, call: &'static str, value: impl FnOnce() -> T) -> Result<T, String> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            return Err(format!("API Error: {call} offline"));
        }
        Ok(value())
    }

    fn user_login(&self) -> LoginResult {
        LoginResult {
            username: "jad".to_string(),
            roles: vec!["ukelonnuser".to_string()],
            error_message: String::new(),
        }
    }

    fn account_for(username: &str) -> Account {
        Account {
            account_id: 3,
            username: username.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            full_name: "Jane Doe".to_string(),
            balance: 125.0,
        }
    }

    fn jobtypes_list() -> Vec<TransactionType> {
        vec![TransactionType {
            id: 1,
            transaction_type_name: "Gressklipping".to_string(),
            transaction_amount: Some(45.0),
            transaction_is_work: true,
            transaction_is_wage_payment: false,
        }]
    }

    fn transactions() -> Vec<Transaction> {
        vec![Transaction {
            id: 7,
            transaction_type: Self::jobtypes_list().into_iter().next(),
            transaction_time: Utc::now(),
            transaction_amount: 45.0,
            paid_out: false,
            name: String::new(),
        }]
    }

    fn users_list() -> Vec<User> {
        vec![User {
            user_id: 1,
            username: "jad".to_string(),
            email: "jad@example.com".to_string(),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
        }]
    }
}

#[async_trait]
impl UkelonnApi for MockApi {
    async fn login_state(&self) -> Result<LoginResult, String> {
        let anonymous = self.anonymous;
        self.respond("login_state", || {
            if anonymous {
                LoginResult::default()
            } else {
                self.user_login()
            }
        })
    }

    async fn login(&self, _credentials: LoginCredentials) -> Result<LoginResult, String> {
        self.respond("login", || self.user_login())
    }

    async fn logout(&self) -> Result<LoginResult, String> {
        self.respond("logout", LoginResult::default)
    }

    async fn account(&self, username: String) -> Result<Account, String> {
        self.respond("account", || Self::account_for(&username))
    }

    async fn accounts(&self) -> Result<Vec<Account>, String> {
        self.respond("accounts", || vec![Self::account_for("jad")])
    }

    async fn jobtypes(&self) -> Result<Vec<TransactionType>, String> {
        self.respond("jobtypes", Self::jobtypes_list)
    }

    async fn create_jobtype(
        &self,
        _jobtype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.respond("create_jobtype", Self::jobtypes_list)
    }

    async fn modify_jobtype(
        &self,
        _jobtype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.respond("modify_jobtype", Self::jobtypes_list)
    }

    async fn register_job(&self, job: PerformedTransaction) -> Result<Account, String> {
        self.respond("register_job", || job.account)
    }

    async fn recent_jobs(&self, _account_id: AccountId) -> Result<Vec<Transaction>, String> {
        self.respond("recent_jobs", Self::transactions)
    }

    async fn delete_jobs(&self, _jobs: AccountWithJobIds) -> Result<Vec<Transaction>, String> {
        self.respond("delete_jobs", Vec::new)
    }

    async fn update_job(&self, _job: UpdatedTransaction) -> Result<Vec<Transaction>, String> {
        self.respond("update_job", Self::transactions)
    }

    async fn paymenttypes(&self) -> Result<Vec<TransactionType>, String> {
        self.respond("paymenttypes", Self::jobtypes_list)
    }

    async fn create_paymenttype(
        &self,
        _paymenttype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.respond("create_paymenttype", Self::jobtypes_list)
    }

    async fn modify_paymenttype(
        &self,
        _paymenttype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.respond("modify_paymenttype", Self::jobtypes_list)
    }

    async fn register_payment(&self, payment: PerformedTransaction) -> Result<Account, String> {
        self.respond("register_payment", || payment.account)
    }

    async fn recent_payments(&self, _account_id: AccountId) -> Result<Vec<Transaction>, String> {
        self.respond("recent_payments", Self::transactions)
    }

    async fn users(&self) -> Result<Vec<User>, String> {
        self.respond("users", Self::users_list)
    }

    async fn create_user(&self, _user: PasswordsWithUser) -> Result<Vec<User>, String> {
        self.respond("create_user", Self::users_list)
    }

    async fn modify_user(&self, _user: User) -> Result<Vec<User>, String> {
        self.respond("modify_user", Self::users_list)
    }

    async fn change_password(&self, _passwords: PasswordsWithUser) -> Result<Vec<User>, String> {
        self.respond("change_password", Self::users_list)
    }

    async fn notifications_to(&self, username: String) -> Result<Vec<Notification>, String> {
        self.polled.lock().unwrap().push(username.clone());
        self.respond("notifications_to", || {
            vec![Notification {
                title: "Ukelønn".to_string(),
                message: format!("{username} har fått betalt"),
            }]
        })
    }

    async fn earnings_sum_over_year(&self, _username: String) -> Result<Vec<SumYear>, String> {
        self.respond("earnings_sum_over_year", || {
            vec![SumYear {
                sum: 1250.0,
                year: 2023,
            }]
        })
    }

    async fn earnings_sum_over_month(
        &self,
        _username: String,
    ) -> Result<Vec<SumYearMonth>, String> {
        self.respond("earnings_sum_over_month", || {
            vec![SumYearMonth {
                sum: 250.0,
                year: 2023,
                month: 5,
            }]
        })
    }
}
