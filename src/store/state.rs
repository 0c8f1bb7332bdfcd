use crate::environment::types::*;
use crate::routes::Location;

/// The single application store. Only `reducer::apply` mutates it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub have_received_response_from_login: bool,
    pub login_response: LoginResult,
    pub location: Location,

    /// The account shown on the user screen, or the one picked by an admin
    pub account: Account,
    pub accounts: im::Vector<Account>,
    pub jobtypes: im::Vector<TransactionType>,
    pub paymenttypes: im::Vector<TransactionType>,
    pub jobs: im::Vector<Transaction>,
    pub payments: im::Vector<Transaction>,
    pub users: im::Vector<User>,

    pub notification: Option<Notification>,
    pub earnings_sum_over_year: im::Vector<SumYear>,
    pub earnings_sum_over_month: im::Vector<SumYearMonth>,

    pub error: Option<String>,
}

impl AppState {
    pub fn username(&self) -> &str {
        &self.login_response.username
    }
}
