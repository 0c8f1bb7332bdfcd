mod view;

pub use view::Admin;

use crate::components::transaction_type_options;
use crate::environment::types::Account;
use crate::helper::format_amount;
use crate::store::AppState;

pub const ADMIN_TITLE: &str = "Registrer betaling";

#[derive(Debug, Clone, PartialEq)]
pub struct AdminProps {
    pub account: Account,
    pub balance: String,
    pub accounts: Vec<(i32, String)>,
    pub paymenttypes: Vec<(i32, String)>,
}

impl AdminProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            account: state.account.clone(),
            balance: format_amount(state.account.balance),
            accounts: state
                .accounts
                .iter()
                .map(|account| (account.account_id, account_label(account)))
                .collect(),
            paymenttypes: transaction_type_options(&state.paymenttypes),
        }
    }
}

pub fn account_label(account: &Account) -> String {
    match account.full_name.as_str() {
        "" => format!("{} {}", account.first_name, account.last_name),
        full_name => full_name.to_string(),
    }
}

pub fn find_account(state: &AppState, account_id: Option<i32>) -> Option<Account> {
    let account_id = account_id?;
    state
        .accounts
        .iter()
        .find(|account| account.account_id == account_id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::*;
    use crate::store::Action;

    fn account(id: i32, first_name: &str, full_name: &str) -> Account {
        Account {
            account_id: id,
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            full_name: full_name.to_string(),
            balance: 10.0 * id as f64,
            ..Default::default()
        }
    }

    #[test]
    fn lists_every_account() {
        let mut state = logged_in(&["ukelonnadmin"]);
        state.accounts = [account(1, "Jane", "Jane Doe"), account(2, "John", "")]
            .into_iter()
            .collect();
        let props = AdminProps::from_state(&state);
        assert_eq!(
            props.accounts,
            vec![(1, "Jane Doe".to_string()), (2, "John Doe".to_string())]
        );
        assert_eq!(props.account, Account::default());
    }

    #[test]
    fn picking_an_account_selects_it() {
        let mut state = logged_in(&["ukelonnadmin"]);
        state.accounts = [account(1, "Jane", "Jane Doe"), account(2, "John", "")]
            .into_iter()
            .collect();
        let picked = find_account(&state, Some(2));
        assert_eq!(picked.as_ref().map(|a| a.account_id), Some(2));
        assert!(find_account(&state, Some(7)).is_none());
        assert!(find_account(&state, None).is_none());

        let sent = recording(|callbacks| callbacks.select_account(picked.clone().unwrap()));
        assert!(matches!(&sent[..], [Action::SelectAccount(a)] if a.account_id == 2));
    }
}
