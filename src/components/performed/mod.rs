mod view;

pub use view::{PerformedJobs, PerformedPayments};

use crate::store::AppState;
use crate::widgets::TransactionRow;

/// What the job and payment history screens show
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryProps {
    pub parent_title: String,
    pub first_name: String,
    pub rows: Vec<TransactionRow>,
}

impl HistoryProps {
    pub fn jobs(state: &AppState) -> Self {
        Self::project(state, &state.jobs)
    }

    pub fn payments(state: &AppState) -> Self {
        Self::project(state, &state.payments)
    }

    fn project(
        state: &AppState,
        transactions: &im::Vector<crate::environment::types::Transaction>,
    ) -> Self {
        Self {
            parent_title: state.location.parent_title(),
            first_name: state.account.first_name.clone(),
            rows: transactions.iter().map(TransactionRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::*;
    use crate::environment::types::*;
    use chrono::{TimeZone, Utc};

    fn payment(id: i32, amount: f64) -> Transaction {
        Transaction {
            id,
            transaction_type: Some(TransactionType {
                id: 4,
                transaction_type_name: "Inn på konto".to_string(),
                ..Default::default()
            }),
            transaction_time: Utc.with_ymd_and_hms(2023, 5, 17, 12, 0, 0).unwrap(),
            transaction_amount: amount,
            paid_out: true,
            name: String::new(),
        }
    }

    #[test]
    fn one_row_per_payment_in_order() {
        let mut state = at(
            logged_in(&["ukelonnuser"]),
            "/ukelonn/performedpayments?parentTitle=Registrer%20jobb",
        );
        state.payments = [payment(9, 100.0), payment(3, 45.5), payment(12, 20.0)]
            .into_iter()
            .collect();

        let props = HistoryProps::payments(&state);
        let ids: Vec<_> = props.rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![9, 3, 12]);
        assert_eq!(props.rows[1].amount, "45.5");
        assert_eq!(props.rows[0].name, "Inn på konto");
        assert_eq!(props.rows[0].date.len(), 10);
        assert_eq!(props.parent_title, "Registrer jobb");
    }

    #[test]
    fn amounts_are_shown_as_received() {
        let mut state = logged_in(&["ukelonnuser"]);
        state.payments = [payment(1, 12.345), payment(2, 100.0)].into_iter().collect();
        let props = HistoryProps::payments(&state);
        assert_eq!(props.rows[0].amount, "12.345");
        assert_eq!(props.rows[1].amount, "100");
    }

    #[test]
    fn no_payments_no_rows() {
        let state = at(logged_in(&["ukelonnuser"]), "/ukelonn/performedpayments");
        let props = HistoryProps::payments(&state);
        assert!(props.rows.is_empty());
        assert_eq!(props.parent_title, "");
    }

    #[test]
    fn jobs_use_their_own_list() {
        let mut state = logged_in(&["ukelonnuser"]);
        state.jobs = [payment(1, 45.0)].into_iter().collect();
        assert_eq!(HistoryProps::jobs(&state).rows.len(), 1);
        assert!(HistoryProps::payments(&state).rows.is_empty());
    }
}
