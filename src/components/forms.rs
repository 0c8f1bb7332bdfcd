//! Client side checks that run before a form dispatches its request.

use crate::environment::types::*;
use crate::helper::{parse_amount, parse_date};
use crate::loc;

pub fn transaction_type(
    id: i32,
    name: &str,
    amount: &str,
    is_work: bool,
) -> Result<TransactionType, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(loc!("Navnet kan ikke være tomt"));
    }
    let transaction_amount = match amount.trim() {
        "" => None,
        amount => Some(parse_amount(amount).ok_or(loc!("Beløpet må være større enn 0"))?),
    };
    Ok(TransactionType {
        id,
        transaction_type_name: name.to_string(),
        transaction_amount,
        transaction_is_work: is_work,
        transaction_is_wage_payment: !is_work,
    })
}

pub fn performed_transaction(
    account: &Account,
    transaction_type_id: Option<i32>,
    amount: &str,
    date: &str,
) -> Result<PerformedTransaction, &'static str> {
    if account.account_id <= 0 {
        return Err(loc!("Velg en konto"));
    }
    let transaction_type_id = transaction_type_id.ok_or(loc!("Velg en type"))?;
    let transaction_amount = parse_amount(amount).ok_or(loc!("Beløpet må være større enn 0"))?;
    let transaction_date = match date.trim() {
        "" => chrono::Utc::now(),
        date => parse_date(date).ok_or(loc!("Ugyldig dato"))?,
    };
    Ok(PerformedTransaction {
        account: account.clone(),
        transaction_type_id,
        transaction_amount,
        transaction_date,
    })
}

pub fn updated_transaction(
    job: &Transaction,
    account: &Account,
    jobtype_id: Option<i32>,
    amount: &str,
    date: &str,
) -> Result<UpdatedTransaction, &'static str> {
    let jobtype_id = jobtype_id.ok_or(loc!("Velg en type"))?;
    Ok(UpdatedTransaction {
        id: job.id,
        account_id: account.account_id,
        jobtype_id,
        transaction_time: parse_date(date).ok_or(loc!("Ugyldig dato"))?,
        transaction_amount: parse_amount(amount).ok_or(loc!("Beløpet må være større enn 0"))?,
    })
}

pub fn user(
    user_id: i32,
    username: &str,
    email: &str,
    firstname: &str,
    lastname: &str,
) -> Result<User, &'static str> {
    let fields = [username, email, firstname, lastname].map(str::trim);
    if fields.iter().any(|field| field.is_empty()) {
        return Err(loc!("Alle feltene må fylles ut"));
    }
    let [username, email, firstname, lastname] = fields.map(str::to_string);
    Ok(User {
        user_id,
        username,
        email,
        firstname,
        lastname,
    })
}

pub fn passwords(
    user: User,
    password: &str,
    password2: &str,
) -> Result<PasswordsWithUser, &'static str> {
    if password.is_empty() {
        return Err(loc!("Passordet kan ikke være tomt"));
    }
    if password != password2 {
        return Err(loc!("Passordene er ikke like"));
    }
    Ok(PasswordsWithUser {
        user,
        password: password.to_string(),
        password2: password2.to_string(),
    })
}
