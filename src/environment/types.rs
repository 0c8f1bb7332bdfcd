use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AccountId = i32;
pub const ADMIN_ROLE: &str = "ukelonnadmin";

// Backend Types

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResult {
    pub username: String,
    pub roles: Vec<String>,
    pub error_message: String,
}

impl LoginResult {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub account_id: AccountId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub balance: f64,
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionType {
    pub id: i32,
    pub transaction_type_name: String,
    pub transaction_amount: Option<f64>,
    pub transaction_is_work: bool,
    pub transaction_is_wage_payment: bool,
}

/// A performed job or a payment
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub transaction_time: DateTime<Utc>,
    #[serde(default)]
    pub transaction_amount: f64,
    #[serde(default)]
    pub paid_out: bool,
    #[serde(default)]
    pub name: String,
}

impl Transaction {
    /// The backend fills in `name` for list endpoints, fall back to the type otherwise
    pub fn name(&self) -> &str {
        match (&self.name, &self.transaction_type) {
            (name, Some(kind)) if name.is_empty() => &kind.transaction_type_name,
            (name, _) => name,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformedTransaction {
    pub account: Account,
    pub transaction_type_id: i32,
    pub transaction_amount: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub transaction_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedTransaction {
    pub id: i32,
    pub account_id: AccountId,
    pub jobtype_id: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub transaction_time: DateTime<Utc>,
    pub transaction_amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithJobIds {
    pub account: Account,
    pub job_ids: Vec<i32>,
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordsWithUser {
    pub user: User,
    pub password: String,
    pub password2: String,
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SumYear {
    pub sum: f64,
    pub year: i32,
}

#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SumYearMonth {
    pub sum: f64,
    pub year: i32,
    pub month: u32,
}

// App Types

/// The single webview window posts no events to the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {}

// Repository Types

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct ClientConfig {
    pub server_url: String,
    #[serde(default = "default_notification_interval")]
    pub notification_interval_secs: u64,
}

fn default_notification_interval() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8181".to_string(),
            notification_interval_secs: default_notification_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn transaction_parses_backend_json() {
        let json = r#"{
            "id": 31,
            "transactionType": { "id": 4, "transactionTypeName": "Inn på konto", "transactionAmount": 0.0, "transactionIsWork": false, "transactionIsWagePayment": true },
            "transactionTime": 1517499000000,
            "transactionAmount": 150.0,
            "paidOut": true
        }"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.id, 31);
        assert_eq!(transaction.name(), "Inn på konto");
        assert_eq!(
            transaction.transaction_time,
            Utc.timestamp_millis_opt(1517499000000).unwrap()
        );
    }

    #[test]
    fn explicit_name_wins_over_transaction_type() {
        let transaction = Transaction {
            id: 1,
            transaction_type: Some(TransactionType {
                transaction_type_name: "Støvsuging".to_string(),
                ..Default::default()
            }),
            transaction_time: Utc::now(),
            transaction_amount: 45.0,
            paid_out: false,
            name: "Gressklipping".to_string(),
        };
        assert_eq!(transaction.name(), "Gressklipping");
    }

    #[test]
    fn login_result_tolerates_missing_fields() {
        let result: LoginResult = serde_json::from_str(r#"{"username":"jad"}"#).unwrap();
        assert!(result.roles.is_empty());
        assert!(!result.is_admin());

        let admin: LoginResult =
            serde_json::from_str(r#"{"username":"admin","roles":["ukelonnadmin","ukelonnuser"]}"#)
                .unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn client_config_defaults_interval() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"server_url":"https://example.com"}"#).unwrap();
        assert_eq!(config.notification_interval_secs, 10);
    }
}
