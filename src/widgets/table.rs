use dioxus::prelude::*;

use crate::environment::types::Transaction;
use crate::helper::format_date;

/// One job or payment, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: i32,
    pub date: String,
    pub name: String,
    pub amount: String,
    pub paid_out: bool,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            date: format_date(&transaction.transaction_time),
            name: transaction.name().to_string(),
            amount: transaction.transaction_amount.to_string(),
            paid_out: transaction.paid_out,
        }
    }
}

/// Rows keep the order they are given in
#[inline_props]
pub fn TransactionTable<'a>(
    cx: Scope<'a>,
    heading: &'a str,
    rows: &'a [TransactionRow],
    show_paid_out: bool,
) -> Element<'a> {
    cx.render(rsx!(
        div { class: "table-responsive",
            table { class: "table",
                thead {
                    tr {
                        th { class: "transaction-table-col transaction-table-col1", "Dato" }
                        th { class: "transaction-table-col transaction-table-col2", "{heading}" }
                        th { class: "transaction-table-col transaction-table-col3b", "Beløp" }
                        show_paid_out.then(|| rsx!(
                            th { class: "transaction-table-col transaction-table-col4", "Utbetalt" }
                        ))
                    }
                }
                tbody {
                    rows.iter().map(|row| rsx!(
                        tr { key: "{row.id}",
                            td { class: "transaction-table-col", "{row.date}" }
                            td { class: "transaction-table-col", "{row.name}" }
                            td { class: "transaction-table-col", "{row.amount}" }
                            show_paid_out.then(|| rsx!(
                                td { class: "transaction-table-col",
                                    input { r#type: "checkbox", checked: "{row.paid_out}", disabled: "true" }
                                }
                            ))
                        }
                    ))
                }
            }
        }
    ))
}
