use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, Val};

use crate::fees::Settlement;
use crate::registry::Loan;

/// Emits an event when a borrower requests a loan.
pub fn emit_loan_created(e: &Env, loan: &Loan) {
    e.events().publish(
        (symbol_short!("loan_new"), loan.id),
        (
            loan.borrower.clone(),
            loan.token.clone(),
            loan.amount,
            loan.collection.clone(),
            loan.collateral_id,
            loan.duration,
            loan.interest_rate,
            loan.collateral_value,
            loan.deadline,
        ),
    );
}

/// Emits an event when a request is withdrawn by its borrower.
pub fn emit_loan_cancelled(e: &Env, loan_id: u64, borrower: &Address) {
    e.events()
        .publish((symbol_short!("loan_cncl"), loan_id), borrower.clone());
}

/// Emits an event when a lender funds a request.
pub fn emit_loan_accepted(
    e: &Env,
    loan_id: u64,
    lender: &Address,
    borrower: &Address,
    start_time: u64,
) {
    e.events().publish(
        (symbol_short!("loan_acpt"), loan_id),
        (lender.clone(), borrower.clone(), start_time),
    );
}

pub fn emit_loan_repaid(
    e: &Env,
    loan_id: u64,
    payer: &Address,
    lender: &Address,
    settlement: &Settlement,
) {
    e.events().publish(
        (symbol_short!("loan_paid"), loan_id),
        (
            payer.clone(),
            lender.clone(),
            settlement.lender_payable,
            settlement.platform_fee,
        ),
    );
}

pub fn emit_loan_liquidated(
    e: &Env,
    loan_id: u64,
    liquidator: &Address,
    lender: &Address,
    settlement: &Settlement,
) {
    e.events().publish(
        (symbol_short!("loan_liq"), loan_id),
        (
            liquidator.clone(),
            lender.clone(),
            settlement.lender_payable,
            settlement.platform_fee,
        ),
    );
}

/// Emits an event when a lender takes the collateral of a defaulted loan.
pub fn emit_nft_claimed(e: &Env, loan: &Loan, lender: &Address) {
    e.events().publish(
        (symbol_short!("nft_claim"), loan.id),
        (lender.clone(), loan.collection.clone(), loan.collateral_id),
    );
}

/// Emits an event for every parameter store mutation.
pub fn emit_config_updated<V>(e: &Env, name: Symbol, value: V)
where
    V: IntoVal<Env, Val>,
{
    e.events().publish((symbol_short!("cfg_upd"), name), value);
}
