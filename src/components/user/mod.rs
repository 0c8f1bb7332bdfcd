mod view;

pub use view::User;

use crate::components::transaction_type_options;
use crate::environment::types::{Account, TransactionType};
use crate::helper::format_amount;
use crate::store::AppState;

/// Back link label on the screens the user screen links to
pub const USER_TITLE: &str = "Registrer jobb";

#[derive(Debug, Clone, PartialEq)]
pub struct UserProps {
    pub account: Account,
    pub balance: String,
    pub jobtypes: Vec<(i32, String)>,
}

impl UserProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            account: state.account.clone(),
            balance: format_amount(state.account.balance),
            jobtypes: transaction_type_options(&state.jobtypes),
        }
    }
}

/// Picking a type fills in its usual amount
pub fn default_amount(types: &im::Vector<TransactionType>, id: Option<i32>) -> String {
    id.and_then(|id| types.iter().find(|kind| kind.id == id))
        .and_then(|kind| kind.transaction_amount)
        .map(format_amount)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::*;

    #[test]
    fn picks_up_the_account_and_job_types() {
        let mut state = logged_in(&["ukelonnuser"]);
        state.account = Account {
            account_id: 3,
            first_name: "Jane".to_string(),
            balance: 125.5,
            ..Default::default()
        };
        state.jobtypes = [
            TransactionType {
                id: 1,
                transaction_type_name: "Gressklipping".to_string(),
                transaction_amount: Some(45.0),
                transaction_is_work: true,
                ..Default::default()
            },
            TransactionType {
                id: 2,
                transaction_type_name: "Annet".to_string(),
                ..Default::default()
            },
        ]
        .into_iter()
        .collect();

        let props = UserProps::from_state(&state);
        assert_eq!(props.balance, "125.50");
        assert_eq!(props.jobtypes[0], (1, "Gressklipping".to_string()));
        assert_eq!(default_amount(&state.jobtypes, Some(1)), "45");
        assert_eq!(default_amount(&state.jobtypes, Some(2)), "");
        assert_eq!(default_amount(&state.jobtypes, None), "");
    }
}
