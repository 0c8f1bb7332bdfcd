use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::super::api::UkelonnApi;
use super::super::types::*;

const API_PREFIX: &str = "ukelonn/api/";

/// HTTP access to the ukelonn backend. The login session lives in the
/// client's cookie store, so all clones share one session.
#[derive(Clone)]
pub struct Model {
    pub url: Url,
    client: Client,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url.as_str()).finish()
    }
}

impl Model {
    pub fn new(server_url: &str) -> Result<Self, String> {
        // Without the trailing slash `join` would replace the last path segment
        let mut url = Url::parse(server_url).string_error("server_url")?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .string_error("client")?;
        Ok(Self { url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        self.url
            .join(API_PREFIX)
            .and_then(|api| api.join(path))
            .string_error("endpoint")
    }

    async fn get<T: DeserializeOwned>(&self, call: &'static str, path: &str) -> Result<T, String> {
        log::trace!("GET {path}");
        let url = self.endpoint(path)?;
        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error(call)?
            .json::<T>()
            .await
            .string_error(call)
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        call: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        log::trace!("POST {path}");
        let url = self.endpoint(path)?;
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .string_error(call)?
            .json::<T>()
            .await
            .string_error(call)
    }
}

#[async_trait]
impl UkelonnApi for Model {
    async fn login_state(&self) -> Result<LoginResult, String> {
        self.get("login_state", "login").await
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<LoginResult, String> {
        log::trace!("Login {}", credentials.username);
        self.post("login", "login", &credentials).await
    }

    async fn logout(&self) -> Result<LoginResult, String> {
        log::trace!("Logout");
        self.post("logout", "logout", &()).await
    }

    async fn account(&self, username: String) -> Result<Account, String> {
        let path = format!("account/{}", urlencoding::encode(&username));
        self.get("account", &path).await
    }

    async fn accounts(&self) -> Result<Vec<Account>, String> {
        self.get("accounts", "accounts").await
    }

    async fn jobtypes(&self) -> Result<Vec<TransactionType>, String> {
        self.get("jobtypes", "jobtypes").await
    }

    async fn create_jobtype(
        &self,
        jobtype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.post("create_jobtype", "admin/jobtype/create", &jobtype)
            .await
    }

    async fn modify_jobtype(
        &self,
        jobtype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.post("modify_jobtype", "admin/jobtype/modify", &jobtype)
            .await
    }

    async fn register_job(&self, job: PerformedTransaction) -> Result<Account, String> {
        self.post("register_job", "job/register", &job).await
    }

    async fn recent_jobs(&self, account_id: AccountId) -> Result<Vec<Transaction>, String> {
        self.get("recent_jobs", &format!("jobs/{account_id}")).await
    }

    async fn delete_jobs(&self, jobs: AccountWithJobIds) -> Result<Vec<Transaction>, String> {
        self.post("delete_jobs", "admin/jobs/delete", &jobs).await
    }

    async fn update_job(&self, job: UpdatedTransaction) -> Result<Vec<Transaction>, String> {
        self.post("update_job", "job/update", &job).await
    }

    async fn paymenttypes(&self) -> Result<Vec<TransactionType>, String> {
        self.get("paymenttypes", "paymenttypes").await
    }

    async fn create_paymenttype(
        &self,
        paymenttype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.post("create_paymenttype", "admin/paymenttype/create", &paymenttype)
            .await
    }

    async fn modify_paymenttype(
        &self,
        paymenttype: TransactionType,
    ) -> Result<Vec<TransactionType>, String> {
        self.post("modify_paymenttype", "admin/paymenttype/modify", &paymenttype)
            .await
    }

    async fn register_payment(&self, payment: PerformedTransaction) -> Result<Account, String> {
        self.post("register_payment", "registerpayment", &payment)
            .await
    }

    async fn recent_payments(&self, account_id: AccountId) -> Result<Vec<Transaction>, String> {
        self.get("recent_payments", &format!("payments/{account_id}"))
            .await
    }

    async fn users(&self) -> Result<Vec<User>, String> {
        self.get("users", "users").await
    }

    async fn create_user(&self, user: PasswordsWithUser) -> Result<Vec<User>, String> {
        self.post("create_user", "admin/user/create", &user).await
    }

    async fn modify_user(&self, user: User) -> Result<Vec<User>, String> {
        self.post("modify_user", "admin/user/modify", &user).await
    }

    async fn change_password(&self, passwords: PasswordsWithUser) -> Result<Vec<User>, String> {
        self.post("change_password", "admin/user/password", &passwords)
            .await
    }

    async fn notifications_to(&self, username: String) -> Result<Vec<Notification>, String> {
        let path = format!("notificationsto/{}", urlencoding::encode(&username));
        self.get("notifications_to", &path).await
    }

    async fn earnings_sum_over_year(&self, username: String) -> Result<Vec<SumYear>, String> {
        let path = format!(
            "statistics/earnings/sumoveryear/{}",
            urlencoding::encode(&username)
        );
        self.get("earnings_sum_over_year", &path).await
    }

    async fn earnings_sum_over_month(
        &self,
        username: String,
    ) -> Result<Vec<SumYearMonth>, String> {
        let path = format!(
            "statistics/earnings/sumovermonth/{}",
            urlencoding::encode(&username)
        );
        self.get("earnings_sum_over_month", &path).await
    }
}

pub trait ResultExt {
    type Output;
    fn string_error(self, call: &'static str) -> Result<Self::Output, String>;
}

impl<T, E: std::fmt::Debug> ResultExt for Result<T, E> {
    type Output = T;
    fn string_error(self, call: &'static str) -> Result<T, String> {
        self.map_err(|e| {
            let string_error = format!("API Error: {call} {e:?}");
            log::error!("{string_error}");
            string_error
        })
    }
}
