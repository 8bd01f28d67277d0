use soroban_sdk::{contracttype, Address, Env};

use crate::error::LoanError;
use crate::storage_types::{DataKey, LOAN_BUMP_AMOUNT, LOAN_LIFETIME_THRESHOLD};

/// Funding side of a loan. Set once, on acceptance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lender {
    Unset,
    Set(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loan {
    pub id: u64,
    pub borrower: Address,
    pub lender: Lender,
    pub token: Address,
    pub amount: i128,
    pub collection: Address,
    pub collateral_id: u64,
    pub duration: u64,
    pub interest_rate: u32,
    pub collateral_value: i128,
    pub deadline: u64,
    pub start_time: u64,
    pub paid: bool,
    pub cancelled: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanStatus {
    Requested = 0,
    Cancelled = 1,
    Accepted = 2,
    Paid = 3,
}

impl Loan {
    pub fn lender(&self) -> Option<Address> {
        match &self.lender {
            Lender::Set(lender) => Some(lender.clone()),
            Lender::Unset => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.lender, Lender::Set(_))
    }

    pub fn status(&self) -> LoanStatus {
        if self.cancelled {
            LoanStatus::Cancelled
        } else if self.paid {
            LoanStatus::Paid
        } else if self.is_accepted() {
            LoanStatus::Accepted
        } else {
            LoanStatus::Requested
        }
    }
}

/// Last allocated loan id, 0 when no loan was ever requested.
pub fn count(e: &Env) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::LoanId)
        .unwrap_or(0u64)
}

fn next_id(e: &Env) -> Result<u64, LoanError> {
    let id = count(e).checked_add(1).ok_or(LoanError::MathOverflow)?;
    e.storage().persistent().set(&DataKey::LoanId, &id);
    e.storage()
        .persistent()
        .extend_ttl(&DataKey::LoanId, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
    Ok(id)
}

/// Stores a new record under the next id; the `id` of `draft` is ignored.
pub fn create(e: &Env, draft: Loan) -> Result<Loan, LoanError> {
    let loan = Loan {
        id: next_id(e)?,
        ..draft
    };
    write(e, &loan);
    Ok(loan)
}

pub fn exists(e: &Env, id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Loan(id))
}

pub fn read(e: &Env, id: u64) -> Result<Loan, LoanError> {
    let key = DataKey::Loan(id);
    let loan: Loan = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(LoanError::LoanNotFound)?;
    e.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
    Ok(loan)
}

pub fn write(e: &Env, loan: &Loan) {
    let key = DataKey::Loan(loan.id);
    e.storage().persistent().set(&key, loan);
    e.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}
