//! Job types and payment types are administered the same way, only the
//! list, the labels and the requests differ.

mod view;

pub use view::{
    AdminJobtypes, AdminJobtypesCreate, AdminJobtypesModify, AdminPaymenttypes,
    AdminPaymenttypesCreate, AdminPaymenttypesModify,
};

use crate::components::transaction_type_options;
use crate::environment::types::TransactionType;
use crate::helper::format_amount;
use crate::loc;
use crate::routes::Route;
use crate::store::{Action, AppState};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TypeKind {
    Job,
    Payment,
}

pub struct Labels {
    pub hub_title: &'static str,
    pub back: &'static str,
    pub modify: &'static str,
    pub create: &'static str,
}

impl TypeKind {
    pub fn labels(&self) -> Labels {
        match self {
            TypeKind::Job => Labels {
                hub_title: loc!("Administrer jobbtyper"),
                back: loc!("Register betaling"),
                modify: loc!("Endre jobbtyper"),
                create: loc!("Lag ny jobbtype"),
            },
            TypeKind::Payment => Labels {
                hub_title: loc!("Administrer betalingstyper"),
                back: loc!("Register betaling"),
                modify: loc!("Endre utbetalingstyper"),
                create: loc!("Lag ny utbetalingstype"),
            },
        }
    }

    pub fn hub(&self) -> Route {
        match self {
            TypeKind::Job => Route::AdminJobtypes,
            TypeKind::Payment => Route::AdminPaymenttypes,
        }
    }

    pub fn modify_route(&self) -> Route {
        match self {
            TypeKind::Job => Route::AdminJobtypesModify,
            TypeKind::Payment => Route::AdminPaymenttypesModify,
        }
    }

    pub fn create_route(&self) -> Route {
        match self {
            TypeKind::Job => Route::AdminJobtypesCreate,
            TypeKind::Payment => Route::AdminPaymenttypesCreate,
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, TypeKind::Job)
    }

    pub fn modify(&self, changed: TransactionType) -> Action {
        match self {
            TypeKind::Job => Action::ModifyJobtypeRequest(changed),
            TypeKind::Payment => Action::ModifyPaymenttypeRequest(changed),
        }
    }

    pub fn create(&self, created: TransactionType) -> Action {
        match self {
            TypeKind::Job => Action::CreateJobtypeRequest(created),
            TypeKind::Payment => Action::CreatePaymenttypeRequest(created),
        }
    }

    pub fn list<'s>(&self, state: &'s AppState) -> &'s im::Vector<TransactionType> {
        match self {
            TypeKind::Job => &state.jobtypes,
            TypeKind::Payment => &state.paymenttypes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAdminProps {
    pub kind: TypeKind,
    pub options: Vec<(i32, String)>,
}

impl TypeAdminProps {
    pub fn from_state(state: &AppState, kind: TypeKind) -> Self {
        Self {
            kind,
            options: transaction_type_options(kind.list(state)),
        }
    }
}

/// Name and amount to prefill the modify form with
pub fn editable(state: &AppState, kind: TypeKind, id: Option<i32>) -> (String, String) {
    id.and_then(|id| kind.list(state).iter().find(|existing| existing.id == id))
        .map(|existing| {
            (
                existing.transaction_type_name.clone(),
                existing.transaction_amount.map(format_amount).unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::forms;
    use crate::components::test_support::*;

    fn state() -> AppState {
        let mut state = logged_in(&["ukelonnadmin"]);
        state.jobtypes = [TransactionType {
            id: 1,
            transaction_type_name: "Gressklipping".to_string(),
            transaction_amount: Some(45.0),
            transaction_is_work: true,
            ..Default::default()
        }]
        .into_iter()
        .collect();
        state.paymenttypes = [TransactionType {
            id: 4,
            transaction_type_name: "Inn på konto".to_string(),
            transaction_is_wage_payment: true,
            ..Default::default()
        }]
        .into_iter()
        .collect();
        state
    }

    #[test]
    fn each_kind_lists_its_own_types() {
        let state = state();
        let jobs = TypeAdminProps::from_state(&state, TypeKind::Job);
        let payments = TypeAdminProps::from_state(&state, TypeKind::Payment);
        assert_eq!(jobs.options, vec![(1, "Gressklipping".to_string())]);
        assert_eq!(payments.options, vec![(4, "Inn på konto".to_string())]);
    }

    #[test]
    fn modify_form_is_prefilled() {
        let state = state();
        assert_eq!(
            editable(&state, TypeKind::Job, Some(1)),
            ("Gressklipping".to_string(), "45".to_string())
        );
        assert_eq!(
            editable(&state, TypeKind::Payment, Some(4)),
            ("Inn på konto".to_string(), String::new())
        );
        assert_eq!(editable(&state, TypeKind::Job, Some(4)), Default::default());
    }

    #[test]
    fn payment_type_requests() {
        let created =
            forms::transaction_type(0, "Kontant", "", TypeKind::Payment.is_work()).unwrap();
        let sent = recording(|callbacks| {
            callbacks.send(TypeKind::Payment.create(created.clone()));
            callbacks.send(TypeKind::Payment.modify(created.clone()));
        });
        assert!(matches!(
            &sent[0],
            Action::CreatePaymenttypeRequest(t) if t.transaction_is_wage_payment
        ));
        assert!(matches!(&sent[1], Action::ModifyPaymenttypeRequest(_)));
    }

    #[test]
    fn payment_type_hub_links() {
        let labels = TypeKind::Payment.labels();
        assert_eq!(labels.hub_title, "Administrer betalingstyper");
        assert_eq!(
            TypeKind::Payment.modify_route().path(),
            "/ukelonn/admin/paymenttypes/modify"
        );
        assert_eq!(
            TypeKind::Payment.create_route().path(),
            "/ukelonn/admin/paymenttypes/create"
        );
    }
}
