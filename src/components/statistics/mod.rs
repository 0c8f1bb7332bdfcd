mod view;

pub use view::Statistics;

use itertools::Itertools;

use crate::environment::types::{SumYear, SumYearMonth};
use crate::store::AppState;

const MONTHS: [&str; 12] = [
    "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september",
    "oktober", "november", "desember",
];

#[derive(Debug, Clone, PartialEq)]
pub struct YearSum {
    pub year: i32,
    pub sum: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthsOfYear {
    pub year: i32,
    /// `(month name, sum)` in the order the backend sent them
    pub months: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EarningsProps {
    pub parent_title: String,
    pub first_name: String,
    pub years: Vec<YearSum>,
    pub months: Vec<MonthsOfYear>,
}

impl EarningsProps {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            parent_title: state.location.parent_title(),
            first_name: state.account.first_name.clone(),
            years: state.earnings_sum_over_year.iter().map(year_sum).collect(),
            months: group_by_year(&state.earnings_sum_over_month),
        }
    }
}

fn year_sum(sum: &SumYear) -> YearSum {
    YearSum {
        year: sum.year,
        sum: sum.sum.to_string(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize))
        .copied()
        .unwrap_or("?")
}

/// Consecutive months of the same year end up in one group
fn group_by_year(sums: &im::Vector<SumYearMonth>) -> Vec<MonthsOfYear> {
    let groups = sums.iter().group_by(|sum| sum.year);
    groups
        .into_iter()
        .map(|(year, months)| MonthsOfYear {
            year,
            months: months
                .map(|sum| (month_name(sum.month), sum.sum.to_string()))
                .collect(),
        })
        .collect()
}
